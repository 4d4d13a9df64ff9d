//! CLI command implementations.
//!
//! This module contains the implementations of all CLI commands:
//! - `show`: Print the merged configuration tree
//! - `get`: Print a single value by dotted path
//! - `completions`: Generate shell completion scripts

pub mod completions;
pub mod get;
pub mod show;

pub use completions::CompletionsCommand;
pub use get::GetCommand;
pub use show::ShowCommand;
