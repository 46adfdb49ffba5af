//! Display rendering of scrubbed values for audit messages.

use serde_json::Value;

use super::{UNSERIALIZABLE_PLACEHOLDER, scrub};

/// Scrub a value and render it as display text.
///
/// Booleans render as `true`/`false`, null as `null`, numbers as decimal
/// text, strings verbatim, and arrays/objects as compact JSON.
pub fn stringify(value: &Value) -> String {
    match scrub(value.clone()) {
        Value::Null => "null".to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        Value::String(s) => s,
        composite => {
            serde_json::to_string(&composite).unwrap_or_else(|_| UNSERIALIZABLE_PLACEHOLDER.into())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sanitize::BINARY_PLACEHOLDER;
    use serde_json::json;

    #[test]
    fn test_scalars() {
        assert_eq!(stringify(&json!(null)), "null");
        assert_eq!(stringify(&json!(true)), "true");
        assert_eq!(stringify(&json!(false)), "false");
        assert_eq!(stringify(&json!(42)), "42");
        assert_eq!(stringify(&json!(-1.25)), "-1.25");
        assert_eq!(stringify(&json!("Old Title")), "Old Title");
    }

    #[test]
    fn test_composites_are_compact_json() {
        assert_eq!(stringify(&json!(["a", 1])), r#"["a",1]"#);
        assert_eq!(stringify(&json!({"k": "v"})), r#"{"k":"v"}"#);
    }

    #[test]
    fn test_binary_is_scrubbed_before_rendering() {
        assert_eq!(stringify(&json!("x\u{1}y")), BINARY_PLACEHOLDER);
        assert_eq!(
            stringify(&json!({"logo": "data:image/png;base64,AAAA"})),
            format!(r#"{{"logo":"{BINARY_PLACEHOLDER}"}}"#)
        );
    }
}
