//! cloudenv - Resolve Azure cloud environment names.
//!
//! Maps names such as `public`, `china` or `usgovernmentl5` to the
//! endpoint records of the matching Azure cloud. Matching is
//! case-insensitive and several aliases may name the same cloud.
//!
//! # Modules
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`config`] - Optional `.cloudenv.yml` loading
//! - [`environment`] - Environment records, alias resolution and selection
//! - [`error`] - Error types and result aliases
//! - [`ui`] - Terminal output
//!
//! # Example
//!
//! ```
//! use cloudenv::environment::definitions::azure_public;
//!
//! let env = cloudenv::from_name("Global").unwrap();
//! assert!(std::ptr::eq(env, azure_public()));
//! assert_eq!(env.resource_manager_endpoint, "https://management.azure.com");
//!
//! let err = cloudenv::from_name("not-a-real-cloud").unwrap_err();
//! assert!(err.to_string().contains("not-a-real-cloud"));
//! ```

pub mod cli;
pub mod config;
pub mod environment;
pub mod error;
pub mod ui;

pub use environment::{from_name, Environment, EnvironmentResolver};
pub use error::{CloudEnvError, Result};
