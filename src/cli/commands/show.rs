//! The `cloudenv show` command.
//!
//! Selects an environment name (argument, `$AZURE_ENVIRONMENT`, config
//! default, then "public"), resolves it and prints the record.

use std::env::VarError;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::cli::args::ShowArgs;
use crate::config::{load_config, CloudEnvConfig};
use crate::environment::{Environment, EnvironmentResolver, EnvironmentSource, Selection};
use crate::error::Result;
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

/// The show command implementation.
pub struct ShowCommand {
    project_root: PathBuf,
    config_path: Option<PathBuf>,
    args: ShowArgs,
}

impl ShowCommand {
    /// Create a new show command.
    pub fn new(project_root: &Path, args: ShowArgs) -> Self {
        Self {
            project_root: project_root.to_path_buf(),
            config_path: None,
            args,
        }
    }

    /// Read config from `path` instead of the project root.
    pub fn with_config_path(mut self, path: Option<PathBuf>) -> Self {
        self.config_path = path;
        self
    }

    /// Pick the environment name to resolve, returning the config it was read against.
    fn selection_with_env<F>(&self, env_fn: F) -> Result<(Selection, CloudEnvConfig)>
    where
        F: Fn(&str) -> std::result::Result<String, VarError>,
    {
        let config = load_config(&self.project_root, self.config_path.as_deref())?;
        let selection = Selection::select_with_env(
            self.args.name.as_deref(),
            config.default_environment.as_deref(),
            env_fn,
        );
        Ok((selection, config))
    }

    /// Execute with a custom env var lookup (for testing).
    pub fn execute_with_env<F>(&self, ui: &mut dyn UserInterface, env_fn: F) -> Result<CommandResult>
    where
        F: Fn(&str) -> std::result::Result<String, VarError>,
    {
        let (selection, config) = self.selection_with_env(env_fn)?;
        warn_on_shadowed_default(&selection, &config, ui);

        let env = selection.resolve(&EnvironmentResolver::new())?;
        debug!("Showing {} for {:?}", env.name, selection.name);

        if self.args.json {
            let json = serde_json::to_string_pretty(env).map_err(anyhow::Error::from)?;
            ui.message(&json);
        } else {
            print_record(env, &selection, ui);
        }

        Ok(CommandResult::success())
    }
}

/// Warn when `$AZURE_ENVIRONMENT` shadows the config `default_environment`.
fn warn_on_shadowed_default(selection: &Selection, config: &CloudEnvConfig, ui: &mut dyn UserInterface) {
    if let (EnvironmentSource::EnvVar(var), Some(default)) =
        (&selection.source, config.default_environment.as_deref())
    {
        ui.warning(&format!(
            "${} overrides config default_environment `{}`",
            var, default
        ));
    }
}

fn print_record(env: &Environment, selection: &Selection, ui: &mut dyn UserInterface) {
    ui.show_header(&format!("{} (from {})", env.name, selection.source));
    ui.key_value("name", env.name);
    for (key, value) in env.endpoints() {
        ui.key_value(key, value);
    }
}

impl Command for ShowCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        self.execute_with_env(ui, |key| std::env::var(key))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CloudEnvError;
    use crate::ui::{MockUI, OutputMode};
    use std::fs;
    use tempfile::TempDir;

    fn no_env(_: &str) -> std::result::Result<String, VarError> {
        Err(VarError::NotPresent)
    }

    fn show(name: &str, json: bool) -> ShowArgs {
        ShowArgs {
            name: Some(name.to_string()),
            json,
        }
    }

    #[test]
    fn prints_every_endpoint() {
        let temp = TempDir::new().unwrap();
        let cmd = ShowCommand::new(temp.path(), show("usgovernmentl5", false));
        let mut ui = MockUI::new();

        cmd.execute(&mut ui).unwrap();

        assert_eq!(ui.value_of("name"), Some("USGovernmentL5"));
        assert_eq!(
            ui.value_of("microsoft_graph_endpoint"),
            Some("https://dod-graph.microsoft.us")
        );
        assert_eq!(ui.pairs().len(), 6);
        assert_eq!(ui.headers(), &["USGovernmentL5 (from command line)".to_string()]);
    }

    #[test]
    fn quiet_mode_omits_header() {
        let temp = TempDir::new().unwrap();
        let cmd = ShowCommand::new(temp.path(), show("china", false));
        let mut ui = MockUI::with_mode(OutputMode::Quiet);

        cmd.execute(&mut ui).unwrap();

        assert!(ui.headers().is_empty());
        assert_eq!(ui.value_of("name"), Some("China"));
    }

    #[test]
    fn json_output_is_the_record() {
        let temp = TempDir::new().unwrap();
        let cmd = ShowCommand::new(temp.path(), show("Global", true));
        let mut ui = MockUI::new();

        cmd.execute(&mut ui).unwrap();

        let value: serde_json::Value = serde_json::from_str(&ui.output()).unwrap();
        assert_eq!(value["name"], "Public");
        assert_eq!(value["resource_manager_endpoint"], "https://management.azure.com");
    }

    #[test]
    fn unknown_name_is_an_error() {
        let temp = TempDir::new().unwrap();
        let cmd = ShowCommand::new(temp.path(), show("not-a-real-cloud", false));
        let mut ui = MockUI::new();

        let err = cmd.execute(&mut ui).unwrap_err();
        assert!(matches!(err, CloudEnvError::NotFound { ref name } if name == "not-a-real-cloud"));
        assert!(ui.messages().is_empty());
    }

    #[test]
    fn explicit_config_path_supplies_default() {
        let temp = TempDir::new().unwrap();
        let config = temp.path().join("custom.yml");
        fs::write(&config, "default_environment: canary\n").unwrap();
        let (selection, loaded) = ShowCommand::new(temp.path(), ShowArgs::default())
            .with_config_path(Some(config))
            .selection_with_env(no_env)
            .unwrap();

        assert_eq!(loaded.default_environment.as_deref(), Some("canary"));
        assert_eq!(selection.name, "canary");
        assert_eq!(selection.source, EnvironmentSource::ConfigDefault);
    }

    #[test]
    fn env_var_over_config_default_warns() {
        let temp = TempDir::new().unwrap();
        fs::write(
            temp.path().join(".cloudenv.yml"),
            "default_environment: canary\n",
        )
        .unwrap();
        let cmd = ShowCommand::new(temp.path(), ShowArgs::default());
        let mut ui = MockUI::new();

        cmd.execute_with_env(&mut ui, |key| {
            if key == "AZURE_ENVIRONMENT" {
                Ok("china".to_string())
            } else {
                Err(VarError::NotPresent)
            }
        })
        .unwrap();

        assert_eq!(ui.value_of("name"), Some("China"));
        assert_eq!(
            ui.warnings(),
            &["$AZURE_ENVIRONMENT overrides config default_environment `canary`".to_string()]
        );
    }

    #[test]
    fn no_warning_without_env_var() {
        let temp = TempDir::new().unwrap();
        fs::write(
            temp.path().join(".cloudenv.yml"),
            "default_environment: canary\n",
        )
        .unwrap();
        let cmd = ShowCommand::new(temp.path(), ShowArgs::default());
        let mut ui = MockUI::new();

        cmd.execute_with_env(&mut ui, no_env).unwrap();

        assert_eq!(ui.value_of("name"), Some("Canary"));
        assert!(ui.warnings().is_empty());
    }

    #[test]
    fn flag_over_config_default_does_not_warn() {
        let temp = TempDir::new().unwrap();
        fs::write(
            temp.path().join(".cloudenv.yml"),
            "default_environment: canary\n",
        )
        .unwrap();
        let cmd = ShowCommand::new(temp.path(), show("dod", false));
        let mut ui = MockUI::new();

        cmd.execute_with_env(&mut ui, no_env).unwrap();

        assert_eq!(ui.value_of("name"), Some("USGovernmentL5"));
        assert!(ui.warnings().is_empty());
    }

    #[test]
    fn missing_explicit_config_is_an_error() {
        let temp = TempDir::new().unwrap();
        let cmd = ShowCommand::new(temp.path(), show("china", false))
            .with_config_path(Some(temp.path().join("absent.yml")));
        let mut ui = MockUI::new();

        let err = cmd.execute(&mut ui).unwrap_err();
        assert!(matches!(err, CloudEnvError::ConfigNotFound { .. }));
    }
}
