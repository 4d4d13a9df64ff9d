//! The configuration resolver.
//!
//! [`ConfigResolver`] composes the file loader and the environment
//! overrides into one merged tree and exposes dotted-path read access.
//! Resolution always succeeds: a missing or unreadable file, a decode
//! failure, or a malformed structured override each degrade gracefully,
//! and the worst case is an empty tree.
//!
//! # Precedence
//!
//! Environment variables override file values; file values override
//! nothing (there are no built-in defaults — callers supply defaults at
//! the read site via [`ConfigResolver::get_or`]).

use std::path::PathBuf;

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::environment::EnvOverrides;
use crate::error::Result;
use crate::loader::FileLoader;
use crate::logging::Logger;
use crate::merger::TreeMerger;
use crate::source::{EnvSource, FileSource, FsFileSource, ProcessEnvSource};
use crate::value::{get_path, ConfigTree};

/// Immutable configuration of the resolver itself.
///
/// Set once at construction; never mutated afterwards.
///
/// # Examples
///
/// ```
/// use trojan::ResolverConfig;
///
/// let config = ResolverConfig::default();
/// assert_eq!(config.env_prefix, "TROJAN_");
/// assert_eq!(config.candidate_paths.len(), 3);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolverConfig {
    /// Candidate file paths, tried in order; the first that exists and
    /// decodes wins.
    pub candidate_paths: Vec<PathBuf>,

    /// Prefix selecting which environment variables are overrides.
    pub env_prefix: String,
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            candidate_paths: vec![
                PathBuf::from("config.yaml"),
                PathBuf::from("config.yml"),
                PathBuf::from("config.json"),
            ],
            env_prefix: "TROJAN_".to_string(),
        }
    }
}

/// Resolves layered configuration: file defaults plus environment
/// overrides.
///
/// # Examples
///
/// Loading with the default candidate paths and the real process
/// environment:
///
/// ```no_run
/// use trojan::{ConfigResolver, ResolverConfig, Value};
///
/// let mut resolver = ConfigResolver::new(ResolverConfig::default());
/// resolver.load();
/// let port = resolver.get_or("app.port", Value::from(3000));
/// ```
///
/// Driving the resolver with a synthetic environment:
///
/// ```
/// use trojan::{ConfigResolver, StaticEnvSource, Value};
///
/// let mut resolver = ConfigResolver::builder()
///     .with_candidate_paths(Vec::<std::path::PathBuf>::new())
///     .with_env_source(StaticEnvSource::new(vec![("TROJAN_APP__PORT", "9090")]))
///     .build();
/// resolver.load();
/// assert_eq!(resolver.get("app.port"), Some(&Value::from(9090)));
/// ```
pub struct ConfigResolver {
    config: ResolverConfig,
    file_source: Box<dyn FileSource>,
    env_source: Box<dyn EnvSource>,
    logger: Logger,
    tree: ConfigTree,
}

impl ConfigResolver {
    /// Creates a resolver with the given configuration and the default
    /// collaborators (real filesystem, real process environment).
    #[must_use]
    pub fn new(config: ResolverConfig) -> Self {
        Self::builder().with_config(config).build()
    }

    /// Returns a builder for injecting paths, prefix, sources, and logger.
    #[must_use]
    pub fn builder() -> ResolverBuilder {
        ResolverBuilder::new()
    }

    /// The resolver's own configuration.
    #[must_use]
    pub fn config(&self) -> &ResolverConfig {
        &self.config
    }

    /// Builds the merged tree from scratch.
    ///
    /// Tries each candidate path in order and takes the first that exists
    /// and decodes; failures are logged and skipped. Then collects every
    /// environment variable matching the prefix and applies it as a
    /// coerced nested override. There is no fatal path: with no usable
    /// file and no overrides the result is an empty tree.
    ///
    /// Each call rebuilds the tree; nothing is cached between calls.
    pub fn load(&mut self) -> &ConfigTree {
        self.tree = match FileLoader::resolve(
            &self.config.candidate_paths,
            self.file_source.as_ref(),
            &self.logger,
        ) {
            Some(loaded) => loaded.tree,
            None => {
                self.logger
                    .info("No config file found, using default/environment configuration");
                ConfigTree::new()
            }
        };

        let overrides = EnvOverrides::collect(self.env_source.as_ref(), &self.config.env_prefix);
        let applied = TreeMerger::apply(&mut self.tree, overrides);
        if applied > 0 {
            self.logger
                .info(&format!("Applied {applied} environment variable overrides"));
        }

        &self.tree
    }

    /// Looks up a value by dotted path.
    ///
    /// Returns `None` if any path segment is missing or a non-final
    /// segment is not a mapping.
    #[must_use]
    pub fn get(&self, path: &str) -> Option<&Value> {
        get_path(&self.tree, path)
    }

    /// Looks up a value by dotted path, returning `default` on any miss.
    ///
    /// # Examples
    ///
    /// ```
    /// use trojan::{ConfigResolver, StaticEnvSource, Value};
    ///
    /// let mut resolver = ConfigResolver::builder()
    ///     .with_candidate_paths(Vec::<std::path::PathBuf>::new())
    ///     .with_env_source(StaticEnvSource::default())
    ///     .build();
    /// resolver.load();
    /// assert_eq!(resolver.get_or("app.port", Value::from(3000)), Value::from(3000));
    /// ```
    #[must_use]
    pub fn get_or(&self, path: &str, default: Value) -> Value {
        self.get(path).cloned().unwrap_or(default)
    }

    /// Returns an owned snapshot of the merged tree.
    ///
    /// The snapshot is independent: mutating it does not affect the
    /// resolver, and a later [`load`](Self::load) does not affect the
    /// snapshot.
    #[must_use]
    pub fn get_all(&self) -> ConfigTree {
        self.tree.clone()
    }

    /// Deserializes the merged tree into a typed value.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Deserialize`](crate::Error::Deserialize) if the
    /// tree does not match the shape of `T`.
    pub fn deserialize_into<T: DeserializeOwned>(&self) -> Result<T> {
        Ok(serde_json::from_value(Value::Object(self.tree.clone()))?)
    }
}

/// Builder for [`ConfigResolver`].
///
/// Defaults to [`ResolverConfig::default`], the real filesystem, the real
/// process environment, and a normal-level logger.
pub struct ResolverBuilder {
    config: ResolverConfig,
    file_source: Box<dyn FileSource>,
    env_source: Box<dyn EnvSource>,
    logger: Logger,
}

impl ResolverBuilder {
    fn new() -> Self {
        Self {
            config: ResolverConfig::default(),
            file_source: Box::new(FsFileSource),
            env_source: Box::new(ProcessEnvSource),
            logger: Logger::default(),
        }
    }

    /// Replaces the whole resolver configuration.
    #[must_use]
    pub fn with_config(mut self, config: ResolverConfig) -> Self {
        self.config = config;
        self
    }

    /// Replaces the ordered candidate path list.
    #[must_use]
    pub fn with_candidate_paths<I, P>(mut self, paths: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<PathBuf>,
    {
        self.config.candidate_paths = paths.into_iter().map(Into::into).collect();
        self
    }

    /// Replaces the environment-variable prefix.
    #[must_use]
    pub fn with_env_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.config.env_prefix = prefix.into();
        self
    }

    /// Injects a file source.
    #[must_use]
    pub fn with_file_source(mut self, source: impl FileSource + 'static) -> Self {
        self.file_source = Box::new(source);
        self
    }

    /// Injects an environment source.
    #[must_use]
    pub fn with_env_source(mut self, source: impl EnvSource + 'static) -> Self {
        self.env_source = Box::new(source);
        self
    }

    /// Injects a logger.
    #[must_use]
    pub fn with_logger(mut self, logger: Logger) -> Self {
        self.logger = logger;
        self
    }

    /// Builds the resolver. The tree starts empty until the first
    /// [`ConfigResolver::load`].
    #[must_use]
    pub fn build(self) -> ConfigResolver {
        ConfigResolver {
            config: self.config,
            file_source: self.file_source,
            env_source: self.env_source,
            logger: self.logger,
            tree: ConfigTree::new(),
        }
    }
}

impl Default for ResolverBuilder {
    fn default() -> Self {
        Self::new()
    }
}
