//! Show command implementation.
//!
//! This module implements the `show` command, which resolves the layered
//! configuration and prints the merged tree.

use crate::error::CliError;
use crate::utils::{build_resolver, GlobalOptions};
use clap::{Args, ValueEnum};

/// Print the merged configuration tree.
#[derive(Args)]
pub struct ShowCommand {
    /// Output format
    #[arg(long, value_enum, default_value = "json", ignore_case = true)]
    pub format: ShowFormat,
}

/// Output format for the show command.
#[derive(Clone, Copy, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum ShowFormat {
    /// Pretty-printed JSON.
    Json,
    /// YAML.
    Yaml,
}

impl ShowCommand {
    /// Execute the show command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let mut resolver = build_resolver(global);
        resolver.load();
        let tree = resolver.get_all();

        let rendered = match self.format {
            ShowFormat::Json => serde_json::to_string_pretty(&tree)
                .map_err(|e| CliError::Render(e.to_string()))?,
            ShowFormat::Yaml => {
                serde_yaml::to_string(&tree).map_err(|e| CliError::Render(e.to_string()))?
            }
        };

        println!("{rendered}");
        Ok(())
    }
}
