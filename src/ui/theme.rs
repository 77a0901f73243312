//! Visual theme and styling.

use console::Style;

/// cloudenv's visual theme.
#[derive(Debug, Clone)]
pub struct CloudEnvTheme {
    /// Style for warning messages (orange).
    pub warning: Style,
    /// Style for error messages (red bold).
    pub error: Style,
    /// Style for headers (cyan bold).
    pub header: Style,
    /// Style for key labels in key-value displays (dim).
    pub key: Style,
    /// Style for values in key-value displays (normal).
    pub value: Style,
}

impl Default for CloudEnvTheme {
    fn default() -> Self {
        Self::new()
    }
}

impl CloudEnvTheme {
    /// Create the default theme.
    pub fn new() -> Self {
        Self {
            warning: Style::new().color256(208),
            error: Style::new().red().bold(),
            header: Style::new().cyan().bold(),
            key: Style::new().dim(),
            value: Style::new(),
        }
    }

    /// A theme that applies no styling.
    pub fn plain() -> Self {
        Self {
            warning: Style::new(),
            error: Style::new(),
            header: Style::new(),
            key: Style::new(),
            value: Style::new(),
        }
    }
}

/// Whether colored output should be used on stdout.
///
/// Honors `NO_COLOR` and whether stdout is a terminal.
pub fn should_use_colors() -> bool {
    std::env::var_os("NO_COLOR").is_none() && console::colors_enabled()
}
