/// Rows moved per mouse wheel notch unless configured otherwise.
pub const DEFAULT_LINES_PER_TICK: u16 = 3;

/// Rows of shadow drawn under the header unless configured otherwise.
pub const DEFAULT_ELEVATION: u16 = 1;

/// UI configuration options derived from config/environment.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct UiOptions {
    pub high_contrast: bool,
    pub ascii_only: bool,
}
