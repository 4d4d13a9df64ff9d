//! Get command implementation.
//!
//! This module implements the `get` command, which resolves the layered
//! configuration and prints a single value addressed by dotted path.

use crate::error::CliError;
use crate::utils::{build_resolver, GlobalOptions};
use clap::Args;
use trojan::{EnvOverrides, Value};

/// Print a single value by dotted path.
#[derive(Args)]
pub struct GetCommand {
    /// Dotted path to look up (e.g. "database.host")
    pub key: String,

    /// Value to print when the key is absent (coerced like an override)
    #[arg(long, value_name = "VALUE")]
    pub default: Option<String>,
}

impl GetCommand {
    /// Execute the get command.
    ///
    /// A missing key with no `--default` is a semantic failure (exit 1),
    /// so scripts can probe for keys.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let mut resolver = build_resolver(global);
        resolver.load();

        let value = match resolver.get(&self.key).cloned() {
            Some(value) => value,
            None => match self.default {
                Some(raw) => EnvOverrides::parse_value(&raw),
                None => {
                    return Err(CliError::SemanticFailure(format!(
                        "key not found: {}",
                        self.key
                    )))
                }
            },
        };

        println!("{}", render(&value));
        Ok(())
    }
}

/// Strings print bare; everything else prints as compact JSON.
fn render(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
