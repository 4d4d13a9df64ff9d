//! Error types for the trojan library.
//!
//! Resolution itself never fails: file and coercion problems are recovered
//! where they occur and reported through the logger. These types exist for
//! the collaborator seams (file reads, decoding) and for typed
//! deserialization of the merged tree.

use std::path::PathBuf;

use thiserror::Error;

use crate::loader::ConfigFormat;

/// Result type alias for operations that may fail with a trojan error.
///
/// # Examples
///
/// ```
/// use trojan::{Error, Result};
///
/// fn example_operation() -> Result<u16> {
///     Ok(8080)
/// }
/// ```
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for the trojan library.
#[derive(Debug, Error)]
pub enum Error {
    /// A candidate file exists but could not be read.
    #[error("cannot read {}: {reason}", path.display())]
    FileAccess {
        /// The path that could not be read.
        path: PathBuf,
        /// The reason the read failed.
        reason: String,
    },

    /// A candidate file was read but its content is not valid for its format.
    #[error("invalid {format} in {}: {message}", path.display())]
    Decode {
        /// The path whose content failed to decode.
        path: PathBuf,
        /// The format implied by the file extension.
        format: ConfigFormat,
        /// A description of the decode failure.
        message: String,
    },

    /// The merged tree does not match the shape of the requested type.
    #[error("configuration does not match the requested type: {0}")]
    Deserialize(#[from] serde_json::Error),
}
