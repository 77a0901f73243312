//! Output mode.

/// Output verbosity mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Headers, data and warnings.
    #[default]
    Normal,
    /// Data and errors only.
    Quiet,
}

impl OutputMode {
    /// Check if this mode shows headers and warnings.
    pub fn shows_status(&self) -> bool {
        matches!(self, Self::Normal)
    }
}
