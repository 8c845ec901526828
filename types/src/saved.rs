//! Saved-state codec for the header metrics.
//!
//! The two header numbers are stored as a flat key-value map so any generic
//! state store can hold them. Both directions check key presence and type;
//! the list position is never part of the map.

use serde_json::{Map, Value};
use thiserror::Error;

use crate::header::HeaderMetrics;

pub const HEADER_HEIGHT_KEY: &str = "headerHeightPx";
pub const HEADER_OFFSET_KEY: &str = "headerOffsetPx";

/// Flat key-value map handed to the host's saved-state store.
pub type SavedStateMap = Map<String, Value>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RestoreError {
    #[error("saved state is missing `{0}`")]
    MissingKey(&'static str),
    #[error("saved state field `{key}` must be {expected}")]
    WrongType {
        key: &'static str,
        expected: &'static str,
    },
}

/// The persisted subset of the collapsible state.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SavedState {
    pub header_height_px: u32,
    pub header_offset_px: f32,
}

impl SavedState {
    #[must_use]
    pub fn to_map(self) -> SavedStateMap {
        let mut map = Map::new();
        map.insert(
            HEADER_HEIGHT_KEY.to_string(),
            Value::from(self.header_height_px),
        );
        map.insert(
            HEADER_OFFSET_KEY.to_string(),
            Value::from(f64::from(self.header_offset_px)),
        );
        map
    }

    /// Decodes a saved map.
    ///
    /// `headerHeightPx` must be a non-negative integer that fits in `u32` and
    /// `headerOffsetPx` must be a float. Integers are rejected for the offset.
    pub fn from_map(map: &SavedStateMap) -> Result<Self, RestoreError> {
        let height = map
            .get(HEADER_HEIGHT_KEY)
            .ok_or(RestoreError::MissingKey(HEADER_HEIGHT_KEY))?;
        let header_height_px = height
            .as_u64()
            .and_then(|value| u32::try_from(value).ok())
            .ok_or(RestoreError::WrongType {
                key: HEADER_HEIGHT_KEY,
                expected: "a non-negative integer",
            })?;

        let offset = map
            .get(HEADER_OFFSET_KEY)
            .ok_or(RestoreError::MissingKey(HEADER_OFFSET_KEY))?;
        let header_offset_px = offset
            .as_f64()
            .filter(|_| offset.is_f64())
            .ok_or(RestoreError::WrongType {
                key: HEADER_OFFSET_KEY,
                expected: "a float",
            })? as f32;

        Ok(Self {
            header_height_px,
            header_offset_px,
        })
    }

    /// Converts into live metrics. Out-of-range offsets are clamped.
    #[must_use]
    pub fn into_metrics(self) -> HeaderMetrics {
        HeaderMetrics::new(self.header_height_px, self.header_offset_px)
    }
}

impl From<&HeaderMetrics> for SavedState {
    fn from(header: &HeaderMetrics) -> Self {
        Self {
            header_height_px: header.height_px(),
            header_offset_px: header.offset_px(),
        }
    }
}
