#![deny(missing_docs, unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

//! # trojan
//!
//! A library for layered configuration resolution: file defaults plus
//! environment-variable overrides, merged into one tree with dotted-path
//! read access.
//!
//! The resolver tries an ordered list of candidate files (JSON or YAML),
//! takes the first that exists and decodes, then layers every environment
//! variable matching a prefix on top. Override names use double
//! underscores for nesting (`TROJAN_DATABASE__HOST` sets
//! `database.host`), and values are coerced from strings to integers,
//! floats, booleans, or embedded JSON. Resolution never fails; the worst
//! case is an empty tree.
//!
//! ## Core Types
//!
//! - [`ConfigResolver`] and [`ResolverConfig`]: resolution and lookup
//! - [`ConfigTree`] and [`Value`]: the merged tree representation
//! - [`FileSource`] and [`EnvSource`]: injected collaborators
//! - [`Logger`] and [`LogLevel`]: load reporting
//!
//! ## Examples
//!
//! ```
//! use trojan::{ConfigResolver, StaticEnvSource, Value};
//!
//! let mut resolver = ConfigResolver::builder()
//!     .with_candidate_paths(Vec::<std::path::PathBuf>::new())
//!     .with_env_source(StaticEnvSource::new(vec![
//!         ("TROJAN_APP__PORT", "9090"),
//!         ("TROJAN_APP__DEBUG", "true"),
//!     ]))
//!     .build();
//! resolver.load();
//!
//! assert_eq!(resolver.get("app.port"), Some(&Value::from(9090)));
//! assert_eq!(resolver.get_or("app.name", Value::from("fallback")), Value::from("fallback"));
//! ```

pub mod environment;
pub mod error;
pub mod loader;
pub mod logging;
pub mod merger;
pub mod resolver;
pub mod source;
pub mod value;

// Re-export key types at crate root for convenience
pub use environment::EnvOverrides;
pub use error::{Error, Result};
pub use loader::{ConfigFormat, FileLoader, LoadedConfig};
pub use logging::{init_logger, LogLevel, Logger};
pub use merger::TreeMerger;
pub use resolver::{ConfigResolver, ResolverBuilder, ResolverConfig};
pub use source::{EnvSource, FileSource, FsFileSource, ProcessEnvSource, StaticEnvSource};
pub use value::{get_path, ConfigTree};

/// A single configuration value: string, number, boolean, null, nested
/// mapping, or sequence.
pub use serde_json::Value;
