//! The merged configuration tree and dotted-path lookup.
//!
//! Configuration values are represented as [`serde_json::Value`], the
//! variant type shared by both decoders: strings, numbers, booleans, null,
//! nested mappings, and sequences. A [`ConfigTree`] is one level of nested
//! mapping; the resolver's root is always a `ConfigTree`, possibly empty.

use serde_json::Value;

/// A recursively nested mapping from string keys to configuration values.
pub type ConfigTree = serde_json::Map<String, Value>;

/// Looks up a value by dotted path, e.g. `"database.host"`.
///
/// Splits the path on `.` and descends one mapping level per segment.
/// Returns `None` if the tree is empty, any segment is missing, or a
/// non-final segment resolves to something other than a mapping. Never
/// mutates the tree.
///
/// # Examples
///
/// ```
/// use serde_json::json;
/// use trojan::value::{get_path, ConfigTree};
///
/// let tree: ConfigTree = serde_json::from_value(json!({"app": {"port": 8080}})).unwrap();
/// assert_eq!(get_path(&tree, "app.port"), Some(&json!(8080)));
/// assert_eq!(get_path(&tree, "app.missing"), None);
/// ```
#[must_use]
pub fn get_path<'a>(tree: &'a ConfigTree, path: &str) -> Option<&'a Value> {
    let mut segments = path.split('.');
    let first = segments.next()?;
    let mut current = tree.get(first)?;
    for segment in segments {
        current = current.as_object()?.get(segment)?;
    }
    Some(current)
}
