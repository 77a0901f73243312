//! Environment selection.
//!
//! Picks which environment name to resolve using the priority chain:
//! 1. Explicit name on the command line
//! 2. The `AZURE_ENVIRONMENT` variable
//! 3. Config `default_environment`
//! 4. Fallback to "public"

use std::env::VarError;

use tracing::debug;

use super::definitions::Environment;
use super::resolver::EnvironmentResolver;
use crate::error::Result;

/// Variable consulted when no name is given explicitly.
pub const ENVIRONMENT_VAR: &str = "AZURE_ENVIRONMENT";

/// Name used when nothing else selects an environment.
pub const FALLBACK_ENVIRONMENT: &str = "public";

/// How the environment name was chosen.
#[derive(Debug, Clone, PartialEq)]
pub enum EnvironmentSource {
    /// Given as a command-line argument.
    Flag,
    /// Read from an environment variable.
    EnvVar(String),
    /// Set via config `default_environment`.
    ConfigDefault,
    /// Fallback to "public".
    Fallback,
}

impl std::fmt::Display for EnvironmentSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Flag => write!(f, "command line"),
            Self::EnvVar(var) => write!(f, "${}", var),
            Self::ConfigDefault => write!(f, "config default"),
            Self::Fallback => write!(f, "default"),
        }
    }
}

/// A chosen environment name and where it came from.
///
/// The name is kept raw; resolving it is a separate step so that an
/// unknown name still reports the exact text the user supplied.
#[derive(Debug, Clone, PartialEq)]
pub struct Selection {
    /// The environment name as supplied.
    pub name: String,
    /// How this name was chosen.
    pub source: EnvironmentSource,
}

impl Selection {
    /// Select using the process environment for step 2.
    ///
    /// # Example
    ///
    /// ```
    /// use cloudenv::environment::{EnvironmentSource, Selection};
    ///
    /// let selection = Selection::select(Some("china"), Some("public"));
    /// assert_eq!(selection.name, "china");
    /// assert_eq!(selection.source, EnvironmentSource::Flag);
    /// ```
    pub fn select(flag: Option<&str>, config_default: Option<&str>) -> Self {
        Self::select_with_env(flag, config_default, |key| std::env::var(key))
    }

    /// Select with a custom env var lookup (for testing).
    pub fn select_with_env<F>(flag: Option<&str>, config_default: Option<&str>, env_fn: F) -> Self
    where
        F: Fn(&str) -> std::result::Result<String, VarError>,
    {
        // 1. Explicit name
        if let Some(name) = flag {
            return Self {
                name: name.to_string(),
                source: EnvironmentSource::Flag,
            };
        }

        // 2. AZURE_ENVIRONMENT; set-but-empty still counts as a choice
        if let Ok(name) = env_fn(ENVIRONMENT_VAR) {
            return Self {
                name,
                source: EnvironmentSource::EnvVar(ENVIRONMENT_VAR.to_string()),
            };
        }

        // 3. Config default_environment
        if let Some(name) = config_default {
            return Self {
                name: name.to_string(),
                source: EnvironmentSource::ConfigDefault,
            };
        }

        // 4. Fallback
        Self {
            name: FALLBACK_ENVIRONMENT.to_string(),
            source: EnvironmentSource::Fallback,
        }
    }

    /// Resolve the selected name.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` when the selected name matches no alias.
    pub fn resolve(&self, resolver: &EnvironmentResolver) -> Result<&'static Environment> {
        debug!("Selected environment {:?} via {}", self.name, self.source);
        resolver.resolve(&self.name)
    }
}
