//! Candidate file resolution and decoding.
//!
//! The resolver tries an ordered list of candidate paths and takes the
//! first one that exists and decodes — a deliberate single-source policy.
//! Later candidates are ignored once one wins; there is no multi-file
//! merge. Failures (unreadable file, invalid content) are reported and the
//! search advances to the next candidate.

use std::fmt;
use std::path::{Path, PathBuf};

use serde_json::Value;

use crate::error::{Error, Result};
use crate::logging::Logger;
use crate::source::FileSource;
use crate::value::ConfigTree;

/// Configuration file format, selected by extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigFormat {
    /// JSON (`.json`).
    Json,
    /// YAML (`.yaml` or `.yml`).
    Yaml,
}

impl fmt::Display for ConfigFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Json => write!(f, "JSON"),
            Self::Yaml => write!(f, "YAML"),
        }
    }
}

impl ConfigFormat {
    /// Selects the format for a candidate path by its extension.
    ///
    /// Returns `None` for unrecognized extensions; such candidates are
    /// skipped during resolution.
    ///
    /// # Examples
    ///
    /// ```
    /// use std::path::Path;
    /// use trojan::ConfigFormat;
    ///
    /// assert_eq!(ConfigFormat::from_path(Path::new("config.json")), Some(ConfigFormat::Json));
    /// assert_eq!(ConfigFormat::from_path(Path::new("config.yml")), Some(ConfigFormat::Yaml));
    /// assert_eq!(ConfigFormat::from_path(Path::new("config.toml")), None);
    /// ```
    #[must_use]
    pub fn from_path(path: &Path) -> Option<Self> {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => Some(Self::Json),
            Some("yaml" | "yml") => Some(Self::Yaml),
            _ => None,
        }
    }

    /// Decodes raw file content into a configuration tree.
    ///
    /// The top-level value must be a mapping; anything else is a decode
    /// failure so that the resolver's root is always a tree. An empty or
    /// null YAML document decodes to an empty tree.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Decode`] if the content is not valid for the
    /// format or its top-level value is not a mapping.
    pub fn decode(self, path: &Path, text: &str) -> Result<ConfigTree> {
        let value: Value = match self {
            Self::Json => serde_json::from_str(text).map_err(|e| Error::Decode {
                path: path.to_path_buf(),
                format: self,
                message: e.to_string(),
            })?,
            Self::Yaml => serde_yaml::from_str(text).map_err(|e| Error::Decode {
                path: path.to_path_buf(),
                format: self,
                message: e.to_string(),
            })?,
        };

        match value {
            Value::Object(tree) => Ok(tree),
            Value::Null => Ok(ConfigTree::new()),
            other => Err(Error::Decode {
                path: path.to_path_buf(),
                format: self,
                message: format!("top-level value must be a mapping, got {}", kind_of(&other)),
            }),
        }
    }
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "a sequence",
        Value::Object(_) => "a mapping",
    }
}

/// A successfully decoded candidate file.
#[derive(Debug, Clone)]
pub struct LoadedConfig {
    /// Path of the winning candidate.
    pub path: PathBuf,
    /// The decoded tree.
    pub tree: ConfigTree,
}

/// Resolves the ordered candidate list against a [`FileSource`].
pub struct FileLoader;

impl FileLoader {
    /// Tries each candidate path in order and returns the first that
    /// exists and decodes.
    ///
    /// Candidates that do not exist are passed over silently; candidates
    /// with unrecognized extensions are skipped; read and decode failures
    /// are logged as warnings and the search continues. Returns `None`
    /// when no candidate yields a tree.
    pub fn resolve(
        paths: &[PathBuf],
        source: &dyn FileSource,
        logger: &Logger,
    ) -> Option<LoadedConfig> {
        for path in paths {
            if !source.exists(path) {
                continue;
            }

            let Some(format) = ConfigFormat::from_path(path) else {
                log::debug!(
                    "skipping candidate with unrecognized extension: {}",
                    path.display()
                );
                continue;
            };

            match source
                .read_to_string(path)
                .and_then(|text| format.decode(path, &text))
            {
                Ok(tree) => {
                    logger.info(&format!("Configuration loaded from: {}", path.display()));
                    return Some(LoadedConfig {
                        path: path.clone(),
                        tree,
                    });
                }
                Err(e) => {
                    logger.warn(&format!("Failed to load config from {}: {e}", path.display()));
                }
            }
        }

        None
    }
}
