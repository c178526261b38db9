//! Pixel-unit conversions for code and CSS consumers.
use crate::parsers::parse_px;
use serde_json::{Number, Value};

/// The root font size that `rem` values are relative to.
pub const DEFAULT_REM_BASE: f64 = 16.0;

/// Converts `"18px"` into the number `18`. Other values pass through.
///
/// Used only for code consumers; CSS output keeps its units.
pub fn px_to_number(value: &Value) -> Value {
    match value {
        Value::String(s) => match parse_px(s) {
            Ok(px) => number_value(px),
            Err(_) => value.clone(),
        },
        _ => value.clone(),
    }
}

/// Converts `"18px"` into `"1.125rem"` against `base`. Returns `None` for
/// anything that is not a pixel length.
pub fn px_to_rem(input: &str, base: f64) -> Option<String> {
    let px = parse_px(input).ok()?;
    Some(format!("{}rem", trim_decimal(px / base)))
}

/// Formats with three decimals, then drops trailing zeros and a bare point:
/// `1.500` becomes `1.5`, `1.000` becomes `1`.
pub fn trim_decimal(value: f64) -> String {
    let formatted = format!("{:.3}", value);
    let trimmed = formatted.trim_end_matches('0').trim_end_matches('.');
    match trimmed {
        "-0" | "" => "0".to_string(),
        other => other.to_string(),
    }
}

/// Integral numbers serialize without a fractional part (`18`, not `18.0`).
pub fn number_value(value: f64) -> Value {
    if value.fract() == 0.0 && value.abs() < i64::MAX as f64 {
        Value::Number(Number::from(value as i64))
    } else {
        Number::from_f64(value)
            .map(Value::Number)
            .unwrap_or(Value::Null)
    }
}
