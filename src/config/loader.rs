//! Configuration file discovery and loading.

use crate::config::schema::CloudEnvConfig;
use crate::error::{CloudEnvError, Result};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// File name looked up in the project root.
pub const CONFIG_FILE_NAME: &str = ".cloudenv.yml";

/// Path of the project config for `project_root`, if the file exists.
pub fn find_project_config(project_root: &Path) -> Option<PathBuf> {
    let path = project_root.join(CONFIG_FILE_NAME);
    if path.is_file() {
        Some(path)
    } else {
        None
    }
}

/// Load a single config file.
///
/// # Errors
///
/// Returns `ConfigNotFound` if the file doesn't exist.
/// Returns `ConfigParseError` if the YAML is invalid.
pub fn load_config_file(path: &Path) -> Result<CloudEnvConfig> {
    let content = fs::read_to_string(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            CloudEnvError::ConfigNotFound {
                path: path.to_path_buf(),
            }
        } else {
            CloudEnvError::Io(e)
        }
    })?;

    parse_config(&content, path)
}

/// Parse YAML content into CloudEnvConfig.
///
/// An empty document yields the default config.
pub fn parse_config(content: &str, source_path: &Path) -> Result<CloudEnvConfig> {
    if content.trim().is_empty() {
        return Ok(CloudEnvConfig::default());
    }

    serde_yaml::from_str(content).map_err(|e| CloudEnvError::ConfigParseError {
        path: source_path.to_path_buf(),
        message: e.to_string(),
    })
}

/// Load the effective config.
///
/// An explicit path must exist. Without one, the project config is used
/// if present, otherwise defaults apply.
pub fn load_config(project_root: &Path, explicit: Option<&Path>) -> Result<CloudEnvConfig> {
    if let Some(path) = explicit {
        debug!("Loading config from {}", path.display());
        return load_config_file(path);
    }

    match find_project_config(project_root) {
        Some(path) => {
            debug!("Loading project config from {}", path.display());
            load_config_file(&path)
        }
        None => {
            debug!("No config file in {}, using defaults", project_root.display());
            Ok(CloudEnvConfig::default())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn parse_default_environment() {
        let config =
            parse_config("default_environment: china\n", Path::new("test.yml")).unwrap();
        assert_eq!(config.default_environment.as_deref(), Some("china"));
    }

    #[test]
    fn parse_empty_document() {
        let config = parse_config("  \n", Path::new("test.yml")).unwrap();
        assert_eq!(config, CloudEnvConfig::default());
    }

    #[test]
    fn parse_rejects_unknown_keys() {
        let err = parse_config("default_env: china\n", Path::new("test.yml")).unwrap_err();
        assert!(matches!(err, CloudEnvError::ConfigParseError { .. }));
    }

    #[test]
    fn parse_error_names_the_file() {
        let err = parse_config("default_environment: [", Path::new("/x/.cloudenv.yml"))
            .unwrap_err();
        assert!(err.to_string().contains("/x/.cloudenv.yml"));
    }

    #[test]
    fn load_missing_explicit_file() {
        let temp = TempDir::new().unwrap();
        let missing = temp.path().join("nope.yml");
        let err = load_config(temp.path(), Some(&missing)).unwrap_err();
        assert!(matches!(err, CloudEnvError::ConfigNotFound { .. }));
    }

    #[test]
    fn load_without_project_config_uses_defaults() {
        let temp = TempDir::new().unwrap();
        let config = load_config(temp.path(), None).unwrap();
        assert!(config.default_environment.is_none());
    }

    #[test]
    fn load_discovers_project_config() {
        let temp = TempDir::new().unwrap();
        fs::write(
            temp.path().join(CONFIG_FILE_NAME),
            "default_environment: dod\n",
        )
        .unwrap();
        let config = load_config(temp.path(), None).unwrap();
        assert_eq!(config.default_environment.as_deref(), Some("dod"));
    }

    #[test]
    fn explicit_path_wins_over_project_config() {
        let temp = TempDir::new().unwrap();
        fs::write(
            temp.path().join(CONFIG_FILE_NAME),
            "default_environment: dod\n",
        )
        .unwrap();
        let other = temp.path().join("other.yml");
        fs::write(&other, "default_environment: canary\n").unwrap();

        let config = load_config(temp.path(), Some(&other)).unwrap();
        assert_eq!(config.default_environment.as_deref(), Some("canary"));
    }
}
