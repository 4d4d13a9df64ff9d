//! Environment variable overrides and value coercion.
//!
//! Variables whose names start with the configured prefix override file
//! values. Raw string values are coerced through five ordered rules,
//! first match wins:
//!
//! 1. ASCII digits only → integer
//! 2. optional integer part, `.`, required fractional digits → float
//! 3. `true` / `false` (case-insensitive) → boolean
//! 4. `{..}` or `[..]` → best-effort JSON decode, falling back to rule 5
//! 5. anything else → the raw string, unchanged

use serde_json::{Number, Value};

use crate::source::EnvSource;

/// Collects and coerces environment variable overrides.
///
/// # Examples
///
/// ```
/// use serde_json::json;
/// use trojan::environment::EnvOverrides;
///
/// assert_eq!(EnvOverrides::parse_value("9090"), json!(9090));
/// assert_eq!(EnvOverrides::parse_value("true"), json!(true));
/// assert_eq!(EnvOverrides::parse_value("localhost"), json!("localhost"));
/// ```
pub struct EnvOverrides;

impl EnvOverrides {
    /// Collects every variable whose name starts with `prefix`, with the
    /// prefix stripped. Non-matching variables are ignored entirely.
    pub fn collect(source: &dyn EnvSource, prefix: &str) -> Vec<(String, String)> {
        source
            .snapshot()
            .into_iter()
            .filter_map(|(name, value)| {
                name.strip_prefix(prefix)
                    .map(|key| (key.to_string(), value))
            })
            .collect()
    }

    /// Coerces a raw environment string into a typed value.
    ///
    /// Applied only to environment-sourced strings; values decoded from a
    /// file keep whatever types the decoder produced.
    #[must_use]
    pub fn parse_value(raw: &str) -> Value {
        if Self::is_integer(raw) {
            if let Ok(n) = raw.parse::<i64>() {
                return Value::from(n);
            }
            if let Ok(n) = raw.parse::<u64>() {
                return Value::from(n);
            }
            // digit runs beyond u64 range degrade to float, then string
            if let Some(n) = raw.parse::<f64>().ok().and_then(Number::from_f64) {
                return Value::Number(n);
            }
            return Value::String(raw.to_string());
        }

        if Self::is_decimal(raw) {
            if let Some(n) = raw.parse::<f64>().ok().and_then(Number::from_f64) {
                return Value::Number(n);
            }
            return Value::String(raw.to_string());
        }

        if raw.eq_ignore_ascii_case("true") {
            return Value::Bool(true);
        }
        if raw.eq_ignore_ascii_case("false") {
            return Value::Bool(false);
        }

        if Self::looks_structured(raw) {
            match serde_json::from_str(raw) {
                Ok(value) => return value,
                Err(e) => {
                    log::debug!("structured override failed to decode, keeping raw string: {e}");
                }
            }
        }

        Value::String(raw.to_string())
    }

    /// One or more ASCII digits, nothing else.
    fn is_integer(s: &str) -> bool {
        !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit())
    }

    /// Optional integer part, one dot, required all-digit fractional part.
    fn is_decimal(s: &str) -> bool {
        match s.split_once('.') {
            Some((whole, frac)) => {
                whole.bytes().all(|b| b.is_ascii_digit())
                    && !frac.is_empty()
                    && frac.bytes().all(|b| b.is_ascii_digit())
            }
            None => false,
        }
    }

    fn looks_structured(s: &str) -> bool {
        (s.starts_with('{') && s.ends_with('}')) || (s.starts_with('[') && s.ends_with(']'))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::StaticEnvSource;
    use serde_json::json;

    #[test]
    fn test_parse_integer() {
        assert_eq!(EnvOverrides::parse_value("0"), json!(0));
        assert_eq!(EnvOverrides::parse_value("9090"), json!(9090));
    }

    #[test]
    fn test_parse_integer_leading_zeros() {
        assert_eq!(EnvOverrides::parse_value("042"), json!(42));
    }

    #[test]
    fn test_parse_float() {
        assert_eq!(EnvOverrides::parse_value("3.14"), json!(3.14));
    }

    #[test]
    fn test_parse_float_without_integer_part() {
        assert_eq!(EnvOverrides::parse_value(".5"), json!(0.5));
    }

    #[test]
    fn test_parse_bool_case_insensitive() {
        assert_eq!(EnvOverrides::parse_value("true"), json!(true));
        assert_eq!(EnvOverrides::parse_value("TRUE"), json!(true));
        assert_eq!(EnvOverrides::parse_value("False"), json!(false));
    }

    #[test]
    fn test_parse_json_object() {
        assert_eq!(EnvOverrides::parse_value(r#"{"a":1}"#), json!({"a": 1}));
    }

    #[test]
    fn test_parse_json_array() {
        assert_eq!(EnvOverrides::parse_value("[1,2]"), json!([1, 2]));
    }

    #[test]
    fn test_parse_broken_json_stays_string() {
        // fails the brace test, rule 5 applies
        assert_eq!(EnvOverrides::parse_value("{broken"), json!("{broken"));
        // passes the brace test but fails to decode, also rule 5
        assert_eq!(
            EnvOverrides::parse_value("{not valid json}"),
            json!("{not valid json}")
        );
    }

    #[test]
    fn test_parse_plain_string() {
        assert_eq!(EnvOverrides::parse_value("localhost"), json!("localhost"));
        assert_eq!(EnvOverrides::parse_value(""), json!(""));
    }

    #[test]
    fn test_parse_negative_number_is_not_integer() {
        // the integer rule admits digits only; a sign falls through to string
        assert_eq!(EnvOverrides::parse_value("-1"), json!("-1"));
    }

    #[test]
    fn test_parse_two_dots_is_not_decimal() {
        assert_eq!(EnvOverrides::parse_value("1.2.3"), json!("1.2.3"));
    }

    #[test]
    fn test_parse_trailing_dot_is_not_decimal() {
        assert_eq!(EnvOverrides::parse_value("5."), json!("5."));
    }

    #[test]
    fn test_parse_huge_digit_run_does_not_panic() {
        let raw = "99999999999999999999999999999999";
        let value = EnvOverrides::parse_value(raw);
        assert!(value.is_number() || value.is_string());
    }

    #[test]
    fn test_collect_filters_by_prefix() {
        let source = StaticEnvSource::new(vec![
            ("TROJAN_APP__PORT", "9090"),
            ("OTHER_KEY", "1"),
            ("TROJANISH", "nope"),
        ]);

        let overrides = EnvOverrides::collect(&source, "TROJAN_");
        assert_eq!(overrides, vec![("APP__PORT".to_string(), "9090".to_string())]);
    }

    #[test]
    fn test_collect_strips_prefix_only_once() {
        let source = StaticEnvSource::new(vec![("TROJAN_TROJAN_X", "1")]);
        let overrides = EnvOverrides::collect(&source, "TROJAN_");
        assert_eq!(overrides, vec![("TROJAN_X".to_string(), "1".to_string())]);
    }

    #[test]
    fn test_collect_empty_environment() {
        let source = StaticEnvSource::default();
        assert!(EnvOverrides::collect(&source, "TROJAN_").is_empty());
    }
}
