//! Configuration for the collapsible scaffold demo.
//!
//! Read from `~/.collapsible/config.toml` (or `$COLLAPSIBLE_CONFIG`). Every
//! field is optional; [`Settings::resolve`] fills in defaults.

use serde::Deserialize;
use std::{
    env, fs,
    path::{Path, PathBuf},
};
use thiserror::Error;

use collapsible_types::{DEFAULT_ELEVATION, DEFAULT_LINES_PER_TICK, Density, UiOptions};

/// Environment variable that overrides the config file location.
pub const CONFIG_ENV: &str = "COLLAPSIBLE_CONFIG";

const APP_DIR: &str = ".collapsible";

// Default value function for serde (bool::default() is false, so only true needs a fn)
const fn default_true() -> bool {
    true
}

#[derive(Debug, Default, Deserialize)]
pub struct ScaffoldConfig {
    pub app: Option<AppConfig>,
    pub scroll: Option<ScrollConfig>,
    pub header: Option<HeaderConfig>,
}

#[derive(Debug, Deserialize)]
pub struct AppConfig {
    /// Enable a high-contrast color palette.
    #[serde(default)]
    pub high_contrast: bool,
    /// Avoid box-drawing and other non-ASCII glyphs.
    #[serde(default)]
    pub ascii_only: bool,
    /// Restore the header position saved on the last quit.
    #[serde(default = "default_true")]
    pub restore_state: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            high_contrast: false,
            ascii_only: false,
            restore_state: true,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct ScrollConfig {
    /// Rows per mouse wheel notch.
    pub lines_per_tick: Option<u16>,
    /// px per terminal row.
    pub density: Option<f32>,
}

#[derive(Debug, Default, Deserialize)]
pub struct HeaderConfig {
    /// Rows of shadow under the header.
    pub elevation: Option<u16>,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config at {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse config at {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

impl ConfigError {
    #[must_use]
    pub fn path(&self) -> &Path {
        match self {
            ConfigError::Read { path, .. } | ConfigError::Parse { path, .. } => path,
        }
    }
}

impl ScaffoldConfig {
    /// Loads the config file. `Ok(None)` when there is no file.
    pub fn load() -> Result<Option<Self>, ConfigError> {
        match config_path() {
            Some(path) => Self::load_from(&path),
            None => Ok(None),
        }
    }

    pub fn load_from(path: &Path) -> Result<Option<Self>, ConfigError> {
        if !path.exists() {
            return Ok(None);
        }

        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&content, path).map(Some)
    }

    pub fn parse(content: &str, path: &Path) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    #[must_use]
    pub fn path() -> Option<PathBuf> {
        config_path()
    }
}

/// Fully resolved settings.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Settings {
    pub ui: UiOptions,
    pub restore_state: bool,
    pub lines_per_tick: u16,
    pub density: Density,
    pub elevation: u16,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            ui: UiOptions::default(),
            restore_state: true,
            lines_per_tick: DEFAULT_LINES_PER_TICK,
            density: Density::default(),
            elevation: DEFAULT_ELEVATION,
        }
    }
}

impl Settings {
    /// Loads the config file, falling back to defaults on any error.
    #[must_use]
    pub fn load() -> Self {
        match ScaffoldConfig::load() {
            Ok(config) => Self::resolve(config.as_ref()),
            Err(err) => {
                tracing::warn!("{err}; using default settings");
                Self::default()
            }
        }
    }

    #[must_use]
    pub fn resolve(config: Option<&ScaffoldConfig>) -> Self {
        let defaults = Self::default();
        let Some(config) = config else {
            return defaults;
        };

        let app = config.app.as_ref();
        let scroll = config.scroll.as_ref();

        let lines_per_tick = match scroll.and_then(|scroll| scroll.lines_per_tick) {
            Some(0) => {
                tracing::warn!("scroll.lines_per_tick must be at least 1; using 1");
                1
            }
            Some(lines) => lines,
            None => defaults.lines_per_tick,
        };

        Self {
            ui: UiOptions {
                high_contrast: app.is_some_and(|app| app.high_contrast),
                ascii_only: app.is_some_and(|app| app.ascii_only),
            },
            restore_state: app.is_none_or(|app| app.restore_state),
            lines_per_tick,
            density: scroll
                .and_then(|scroll| scroll.density)
                .map_or(defaults.density, Density::new),
            elevation: config
                .header
                .as_ref()
                .and_then(|header| header.elevation)
                .unwrap_or(defaults.elevation),
        }
    }
}

/// `~/.collapsible`
#[must_use]
pub fn app_dir() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(APP_DIR))
}

#[must_use]
pub fn config_path() -> Option<PathBuf> {
    resolve_config_path(env::var_os(CONFIG_ENV).map(PathBuf::from))
}

fn resolve_config_path(override_path: Option<PathBuf>) -> Option<PathBuf> {
    override_path
        .filter(|path| !path.as_os_str().is_empty())
        .or_else(|| app_dir().map(|dir| dir.join("config.toml")))
}

/// Where the demo keeps its saved header state.
#[must_use]
pub fn state_path() -> Option<PathBuf> {
    app_dir().map(|dir| dir.join("state.json"))
}

/// Log directories in order of preference: `~/.collapsible/logs`, then
/// `./.collapsible/logs`.
#[must_use]
pub fn log_dirs() -> Vec<PathBuf> {
    let mut dirs = Vec::with_capacity(2);
    if let Some(dir) = app_dir() {
        dirs.push(dir.join("logs"));
    }
    dirs.push(PathBuf::from(APP_DIR).join("logs"));
    dirs
}
