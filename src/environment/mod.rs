//! Azure cloud environments and name resolution.
//!
//! - [`definitions`] - the five built-in environment records
//! - [`resolver`] - case-insensitive alias lookup
//! - [`selection`] - choosing which name to resolve (flag, env var, config, fallback)

pub mod definitions;
pub mod resolver;
pub mod selection;

pub use definitions::Environment;
pub use resolver::{from_name, EnvironmentResolver};
pub use selection::{EnvironmentSource, Selection, ENVIRONMENT_VAR, FALLBACK_ENVIRONMENT};
