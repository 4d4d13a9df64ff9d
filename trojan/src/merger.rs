//! Nested-key assignment of environment overrides.
//!
//! Override names use a double-underscore convention: `DATABASE__HOST`
//! addresses `database.host` in the tree. Segments are lower-cased, so
//! environment addressing is case-insensitive while file keys stay
//! verbatim. A scalar sitting at an intermediate segment is replaced by a
//! mapping — intentional last-writer-wins behavior.

use serde_json::Value;

use crate::environment::EnvOverrides;
use crate::value::ConfigTree;

/// Applies coerced overrides into the configuration tree.
///
/// # Examples
///
/// ```
/// use serde_json::json;
/// use trojan::merger::TreeMerger;
/// use trojan::value::ConfigTree;
///
/// let mut tree = ConfigTree::new();
/// TreeMerger::set_nested_value(&mut tree, "DATABASE__HOST", json!("localhost"));
/// assert_eq!(tree.get("database"), Some(&json!({"host": "localhost"})));
/// ```
pub struct TreeMerger;

impl TreeMerger {
    /// Coerces and assigns each collected override, returning how many
    /// were applied.
    pub fn apply(tree: &mut ConfigTree, overrides: Vec<(String, String)>) -> usize {
        let count = overrides.len();
        for (key, raw) in overrides {
            let value = EnvOverrides::parse_value(&raw);
            log::debug!("applying override {key}");
            Self::set_nested_value(tree, &key, value);
        }
        count
    }

    /// Sets a value at a double-underscore-delimited path.
    ///
    /// Splits `path` on the literal `__`, lower-cases every segment, and
    /// walks the tree through all segments but the last, creating empty
    /// mappings where a segment is missing or holds a non-mapping value.
    /// The final segment's key is set to `value`, overwriting any
    /// existing entry.
    pub fn set_nested_value(tree: &mut ConfigTree, path: &str, value: Value) {
        let mut segments = path.split("__").map(str::to_lowercase);
        let Some(mut key) = segments.next() else {
            return;
        };

        let mut current = tree;
        for next in segments {
            if !matches!(current.get(&key), Some(Value::Object(_))) {
                current.insert(key.clone(), Value::Object(ConfigTree::new()));
            }
            let Some(Value::Object(child)) = current.get_mut(&key) else {
                return;
            };
            current = child;
            key = next;
        }

        current.insert(key, value);
    }
}
