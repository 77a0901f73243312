//! Terminal output.
//!
//! This module provides:
//! - [`UserInterface`] trait for output abstraction
//! - [`TerminalUI`] for writing to the terminal
//! - [`MockUI`] for capturing output in tests
//!
//! Data (records, JSON) goes to stdout through [`UserInterface::message`]
//! and [`UserInterface::key_value`]; errors go to stderr.
//!
//! # Example
//!
//! ```
//! use cloudenv::ui::{MockUI, UserInterface};
//!
//! let mut ui = MockUI::new();
//! ui.key_value("storage_suffix", "core.windows.net");
//! assert!(ui.has_message("core.windows.net"));
//! ```

pub mod mock;
pub mod output;
pub mod terminal;
pub mod theme;

pub use mock::MockUI;
pub use output::OutputMode;
pub use terminal::TerminalUI;
pub use theme::{should_use_colors, CloudEnvTheme};

/// Trait for user-facing output.
///
/// This trait allows mocking the UI in tests.
pub trait UserInterface {
    /// Display a line of data. Always shown.
    fn message(&mut self, msg: &str);

    /// Display a labelled value. Always shown.
    fn key_value(&mut self, key: &str, value: &str);

    /// Display a warning message.
    fn warning(&mut self, msg: &str);

    /// Display an error message.
    fn error(&mut self, msg: &str);

    /// Show a header/banner. Suppressed in quiet mode.
    fn show_header(&mut self, title: &str);
}
