//! Terminal UI.

use super::output::OutputMode;
use super::theme::{should_use_colors, CloudEnvTheme};
use super::UserInterface;

/// Width of the key column in key-value output.
const KEY_WIDTH: usize = 28;

/// UI writing data to stdout and diagnostics to stderr.
pub struct TerminalUI {
    mode: OutputMode,
    theme: CloudEnvTheme,
}

impl TerminalUI {
    /// Create a terminal UI, picking colors from the terminal.
    pub fn new(mode: OutputMode) -> Self {
        let theme = if should_use_colors() {
            CloudEnvTheme::new()
        } else {
            CloudEnvTheme::plain()
        };
        Self { mode, theme }
    }
}

impl UserInterface for TerminalUI {
    fn message(&mut self, msg: &str) {
        println!("{}", msg);
    }

    fn key_value(&mut self, key: &str, value: &str) {
        let label = format!("{:<width$}", key, width = KEY_WIDTH);
        println!(
            "{}{}",
            self.theme.key.apply_to(label),
            self.theme.value.apply_to(value)
        );
    }

    fn warning(&mut self, msg: &str) {
        if self.mode.shows_status() {
            eprintln!("{}", self.theme.warning.apply_to(msg));
        }
    }

    fn error(&mut self, msg: &str) {
        eprintln!("{}", self.theme.error.apply_to(msg));
    }

    fn show_header(&mut self, title: &str) {
        if self.mode.shows_status() {
            println!("{}", self.theme.header.apply_to(title));
        }
    }
}
