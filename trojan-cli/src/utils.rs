//! Utility functions for CLI operations.
//!
//! This module provides the global option set shared by all commands and
//! the resolver construction they have in common.

use std::path::PathBuf;

use trojan::{init_logger, ConfigResolver, ResolverConfig};

/// Global CLI options shared across all commands.
#[derive(Debug, Clone)]
pub struct GlobalOptions {
    /// Enable verbose output.
    pub verbose: bool,

    /// Suppress non-essential output.
    pub quiet: bool,

    /// Extra config file tried before the default candidates.
    pub config: Option<PathBuf>,

    /// Override for the environment-variable prefix.
    pub prefix: Option<String>,
}

/// Build a resolver from the global options.
///
/// An explicit `--config` path is tried before the default candidates;
/// `--prefix` replaces the default `TROJAN_` prefix. The resolver reports
/// through a logger at the verbosity the flags select.
pub fn build_resolver(global: &GlobalOptions) -> ConfigResolver {
    let mut config = ResolverConfig::default();

    if let Some(path) = &global.config {
        config.candidate_paths.insert(0, path.clone());
    }

    if let Some(prefix) = &global.prefix {
        config.env_prefix.clone_from(prefix);
    }

    ConfigResolver::builder()
        .with_config(config)
        .with_logger(init_logger(global.verbose, global.quiet))
        .build()
}
