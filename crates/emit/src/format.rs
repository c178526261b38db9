//! Small text helpers shared by the emitters.

use serde_json::Value;

/// Renders a scalar as CSS or JS text. Composite values have no scalar form.
pub fn scalar_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Null | Value::Array(_) | Value::Object(_) => None,
    }
}

/// A JS object key: bare when it is a valid identifier, quoted otherwise.
pub fn js_key(key: &str) -> String {
    let mut chars = key.chars();
    let identifier = chars
        .next()
        .is_some_and(|c| c.is_ascii_alphabetic() || c == '_' || c == '$')
        && chars.all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '$');
    if identifier {
        key.to_string()
    } else {
        js_string(key)
    }
}

/// A JS string literal with JSON escaping.
pub fn js_string(text: &str) -> String {
    Value::String(text.to_string()).to_string()
}

/// Pretty-prints JSON with two-space indentation for a generated module.
pub fn js_literal(value: &Value) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(value)
}
