//! String helpers.

use serde_json::Value;

/// Default length used by [`truncate_strings`] callers.
pub const DEFAULT_TRUNCATE_LEN: usize = 500;

const ELLIPSIS: &str = "...";

/// Returns true if `s` is non-empty and consists only of ASCII digits.
pub fn is_numeric(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit())
}

/// Shorten every string nested inside `value` to at most `max_len` characters.
///
/// Strings longer than `max_len` keep their first `max_len` characters and
/// gain a trailing `"..."`. Objects and arrays are walked recursively; a bare
/// top-level string is left alone. The value is modified in place and
/// returned for chaining.
pub fn truncate_strings(value: &mut Value, max_len: usize) -> &mut Value {
    match value {
        Value::Object(map) => {
            for child in map.values_mut() {
                truncate_child(child, max_len);
            }
        }
        Value::Array(items) => {
            for child in items.iter_mut() {
                truncate_child(child, max_len);
            }
        }
        _ => {}
    }
    value
}

fn truncate_child(child: &mut Value, max_len: usize) {
    match child {
        Value::String(s) => {
            let cut = s.char_indices().nth(max_len).map(|(index, _)| index);
            if let Some(cut) = cut {
                s.truncate(cut);
                s.push_str(ELLIPSIS);
            }
        }
        Value::Object(_) | Value::Array(_) => {
            truncate_strings(child, max_len);
        }
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_is_numeric() {
        assert!(is_numeric("0123"));
        assert!(!is_numeric(""));
        assert!(!is_numeric("12.5"));
        assert!(!is_numeric("-3"));
        assert!(!is_numeric("１２"));
    }

    #[test]
    fn test_truncates_nested_strings() {
        let mut value = json!({
            "short": "abc",
            "long": "abcdefgh",
            "nested": {"list": ["abcdefgh", 42, null]}
        });
        truncate_strings(&mut value, 5);
        assert_eq!(
            value,
            json!({
                "short": "abc",
                "long": "abcde...",
                "nested": {"list": ["abcde...", 42, null]}
            })
        );
    }

    #[test]
    fn test_exact_length_untouched() {
        let mut value = json!({"s": "12345"});
        truncate_strings(&mut value, 5);
        assert_eq!(value["s"], "12345");
    }

    #[test]
    fn test_counts_characters_not_bytes() {
        let mut value = json!(["héllo wörld"]);
        truncate_strings(&mut value, 4);
        assert_eq!(value[0], "héll...");
    }

    #[test]
    fn test_top_level_string_untouched() {
        let mut value = json!("abcdefgh");
        truncate_strings(&mut value, 2);
        assert_eq!(value, json!("abcdefgh"));
    }

    #[test]
    fn test_default_length() {
        let mut value = json!({"s": "x".repeat(DEFAULT_TRUNCATE_LEN + 1)});
        truncate_strings(&mut value, DEFAULT_TRUNCATE_LEN);
        let s = value["s"].as_str().unwrap();
        assert_eq!(s.len(), DEFAULT_TRUNCATE_LEN + 3);
        assert!(s.ends_with("..."));
    }
}
