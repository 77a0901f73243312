//! Configuration loading for cloudenv.
//!
//! A project may carry a `.cloudenv.yml` naming its default environment.
//! The file is optional; `--config <path>` points at one explicitly.
//!
//! # Example
//!
//! ```
//! use cloudenv::config::load_config;
//! use tempfile::TempDir;
//! use std::fs;
//!
//! let temp = TempDir::new().unwrap();
//! fs::write(temp.path().join(".cloudenv.yml"), "default_environment: china").unwrap();
//!
//! let config = load_config(temp.path(), None).unwrap();
//! assert_eq!(config.default_environment, Some("china".to_string()));
//! ```

pub mod loader;
pub mod schema;

pub use loader::{
    find_project_config, load_config, load_config_file, parse_config, CONFIG_FILE_NAME,
};
pub use schema::CloudEnvConfig;
