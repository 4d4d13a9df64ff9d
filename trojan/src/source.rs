//! Injected capabilities for file and environment access.
//!
//! The resolver never touches the filesystem or the process environment
//! directly. Both are reached through the traits in this module, so a
//! resolver can be driven by a synthetic environment in tests or embedded
//! hosts. [`FsFileSource`] and [`ProcessEnvSource`] are the production
//! implementations.

use std::fs;
use std::path::Path;

use crate::error::{Error, Result};

/// Provides access to candidate configuration files.
///
/// Read failures surface as [`Error::FileAccess`]; the resolver recovers
/// from them by advancing to the next candidate path.
pub trait FileSource {
    /// Reports whether a candidate path currently exists.
    fn exists(&self, path: &Path) -> bool;

    /// Returns the raw text content of a candidate path.
    ///
    /// # Errors
    ///
    /// Returns [`Error::FileAccess`] if the path cannot be read.
    fn read_to_string(&self, path: &Path) -> Result<String>;
}

/// Provides a snapshot of environment variables.
///
/// The snapshot is taken at call time; it is not a live view of the
/// environment.
pub trait EnvSource {
    /// Returns every variable name/value pair visible at the moment of
    /// the call.
    fn snapshot(&self) -> Vec<(String, String)>;
}

/// Filesystem-backed [`FileSource`] using `std::fs`.
///
/// # Examples
///
/// ```
/// use std::path::Path;
/// use trojan::{FileSource, FsFileSource};
///
/// let source = FsFileSource;
/// assert!(!source.exists(Path::new("/nonexistent/config.yaml")));
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct FsFileSource;

impl FileSource for FsFileSource {
    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn read_to_string(&self, path: &Path) -> Result<String> {
        fs::read_to_string(path).map_err(|e| Error::FileAccess {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })
    }
}

/// [`EnvSource`] backed by the real process environment.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessEnvSource;

impl EnvSource for ProcessEnvSource {
    fn snapshot(&self) -> Vec<(String, String)> {
        std::env::vars().collect()
    }
}

/// In-memory [`EnvSource`] holding a fixed set of variables.
///
/// Useful for tests and for embedding the resolver where the process
/// environment is not the desired input.
///
/// # Examples
///
/// ```
/// use trojan::{EnvSource, StaticEnvSource};
///
/// let source = StaticEnvSource::new(vec![("TROJAN_APP__PORT", "9090")]);
/// assert_eq!(source.snapshot().len(), 1);
/// ```
#[derive(Debug, Clone, Default)]
pub struct StaticEnvSource {
    vars: Vec<(String, String)>,
}

impl StaticEnvSource {
    /// Creates a source from any collection of name/value pairs.
    pub fn new<K, V, I>(vars: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            vars: vars
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

impl EnvSource for StaticEnvSource {
    fn snapshot(&self) -> Vec<(String, String)> {
        self.vars.clone()
    }
}
