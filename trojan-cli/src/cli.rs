//! CLI structure and command definitions.
//!
//! This module defines the main CLI structure using clap's derive macros,
//! including global options and subcommands.

use crate::commands::{CompletionsCommand, GetCommand, ShowCommand};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Command-line tool for inspecting layered trojan configuration.
#[derive(Parser)]
#[command(name = "trojan")]
#[command(version, about = "Inspect layered trojan configuration", long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(long, global = true)]
    pub verbose: bool,

    /// Suppress non-essential output
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Extra config file tried before the default candidates
    #[arg(long, value_name = "PATH", global = true, env = "TROJAN_CONFIG")]
    pub config: Option<PathBuf>,

    /// Override the environment-variable prefix (default: TROJAN_)
    #[arg(long, value_name = "PREFIX", global = true)]
    pub prefix: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

/// Available CLI commands.
#[derive(Subcommand)]
pub enum Command {
    /// Print the merged configuration tree
    Show(ShowCommand),

    /// Print a single value by dotted path
    Get(GetCommand),

    /// Generate shell completion scripts
    Completions(CompletionsCommand),
}
