//! Conversion between px and terminal rows.

use tracing::warn;

/// How many px one terminal row represents.
///
/// Header metrics and scroll deltas are kept in px; layout happens in rows.
/// The default density maps one px to one row.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Density {
    px_per_row: f32,
}

impl Density {
    pub const UNIT: Self = Self { px_per_row: 1.0 };

    /// Builds a density, falling back to [`Density::UNIT`] for values that are
    /// not finite and positive.
    #[must_use]
    pub fn new(px_per_row: f32) -> Self {
        if px_per_row.is_finite() && px_per_row > 0.0 {
            Self { px_per_row }
        } else {
            warn!(px_per_row, "Ignoring invalid density, using 1 px per row");
            Self::UNIT
        }
    }

    #[must_use]
    pub fn px_per_row(self) -> f32 {
        self.px_per_row
    }

    #[must_use]
    pub fn rows_to_px(self, rows: u16) -> u32 {
        (f32::from(rows) * self.px_per_row).round() as u32
    }

    /// Converts a px length into layout rows, saturating at `u16::MAX`.
    #[must_use]
    pub fn px_to_rows(self, px: u32) -> u16 {
        let rows = (px as f32 / self.px_per_row).round();
        rows.min(f32::from(u16::MAX)) as u16
    }

    /// Converts a signed px offset into a signed row offset.
    #[must_use]
    pub fn offset_to_rows(self, offset_px: f32) -> i32 {
        (offset_px / self.px_per_row).round() as i32
    }

    #[must_use]
    pub fn rows_to_delta_px(self, rows: f32) -> f32 {
        rows * self.px_per_row
    }
}

impl Default for Density {
    fn default() -> Self {
        Self::UNIT
    }
}
