//! The `cloudenv list` command.

use serde::Serialize;

use crate::cli::args::ListArgs;
use crate::environment::EnvironmentResolver;
use crate::error::Result;
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

/// One environment and the names that resolve to it.
#[derive(Debug, Serialize)]
struct ListEntry {
    name: &'static str,
    aliases: Vec<&'static str>,
}

/// The list command implementation.
pub struct ListCommand {
    args: ListArgs,
    resolver: EnvironmentResolver,
}

impl ListCommand {
    /// Create a new list command.
    pub fn new(args: ListArgs) -> Self {
        Self {
            args,
            resolver: EnvironmentResolver::new(),
        }
    }

    fn entries(&self) -> Vec<ListEntry> {
        self.resolver
            .environments()
            .into_iter()
            .map(|env| ListEntry {
                name: env.name,
                aliases: self.resolver.aliases_for(env),
            })
            .collect()
    }
}

impl Command for ListCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let entries = self.entries();

        if self.args.json {
            let json = serde_json::to_string_pretty(&entries).map_err(anyhow::Error::from)?;
            ui.message(&json);
            return Ok(CommandResult::success());
        }

        ui.show_header("Environments");
        for entry in &entries {
            ui.key_value(entry.name, &entry.aliases.join(", "));
        }

        Ok(CommandResult::success())
    }
}
