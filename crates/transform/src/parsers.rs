//! Low-level nom parser functions for CSS-like length values.

use nom::{
    IResult, Parser,
    bytes::complete::tag_no_case,
    combinator::all_consuming,
    number::complete::double,
    sequence::terminated,
};
use thiserror::Error;

/// Errors that can occur while parsing token values.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum TransformError {
    #[error("Parse error: {0}")]
    Parse(String),

    #[error("Invalid value for '{property}': {value}")]
    InvalidValue { property: String, value: String },
}

/// Parses a pixel length such as `18px` or `-0.5px` into its number.
pub fn pixel_length(input: &str) -> IResult<&str, f64> {
    terminated(double, tag_no_case("px")).parse(input)
}

/// Helper to run a nom parser over a whole, trimmed input.
pub fn run_parser<'a, T, F>(parser: F, input: &'a str) -> Result<T, TransformError>
where
    F: Parser<&'a str, Output = T, Error = nom::error::Error<&'a str>>,
{
    match all_consuming(parser).parse(input.trim()) {
        Ok((_, result)) => Ok(result),
        Err(e) => Err(TransformError::Parse(format!("'{}': {}", input, e))),
    }
}

/// Parses a full string as a pixel length.
pub fn parse_px(input: &str) -> Result<f64, TransformError> {
    let value = run_parser(pixel_length, input)?;
    if value.is_finite() {
        Ok(value)
    } else {
        Err(TransformError::InvalidValue {
            property: "length".to_string(),
            value: input.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_px() {
        assert_eq!(parse_px("18px").unwrap(), 18.0);
        assert_eq!(parse_px(" 1.5PX ").unwrap(), 1.5);
        assert_eq!(parse_px("-2px").unwrap(), -2.0);
        assert!(parse_px("18").is_err());
        assert!(parse_px("1.5rem").is_err());
        assert!(parse_px("16px 24px").is_err());
    }
}
