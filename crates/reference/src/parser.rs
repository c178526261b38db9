//! A `nom`-based parser for reference spans inside token values.
use super::ast::{Fragment, ValueTemplate};
use crate::error::ReferenceError;
use nom::{
    IResult, Parser,
    branch::alt,
    bytes::complete::{is_not, tag, take_while1},
    character::complete::char,
    combinator::{all_consuming, map},
    multi::{many0, separated_list1},
    sequence::delimited,
};
use swatch_types::TokenPath;

// --- Main Public Parser ---

/// Splits a value string into literal text and `{a.b.c}` reference spans.
///
/// Braces that do not form a well-formed reference are kept as literal text.
pub fn parse_value_template(input: &str) -> Result<ValueTemplate, ReferenceError> {
    match all_consuming(many0(fragment)).parse(input) {
        Ok((_, fragments)) => Ok(ValueTemplate {
            fragments: coalesce(fragments),
        }),
        Err(e) => Err(ReferenceError::Parse {
            input: input.to_string(),
            message: e.to_string(),
        }),
    }
}

// --- Combinators ---

fn segment(input: &str) -> IResult<&str, &str> {
    take_while1(|c: char| c != '.' && c != '{' && c != '}' && !c.is_whitespace()).parse(input)
}

fn reference(input: &str) -> IResult<&str, TokenPath> {
    map(
        delimited(char('{'), separated_list1(char('.'), segment), char('}')),
        |segments: Vec<&str>| TokenPath::new(segments),
    )
    .parse(input)
}

fn fragment(input: &str) -> IResult<&str, Fragment> {
    alt((
        map(reference, Fragment::Reference),
        map(is_not("{"), |s: &str| Fragment::Literal(s.to_string())),
        // A stray brace that does not open a reference.
        map(tag("{"), |s: &str| Fragment::Literal(s.to_string())),
    ))
    .parse(input)
}

fn coalesce(fragments: Vec<Fragment>) -> Vec<Fragment> {
    let mut out: Vec<Fragment> = Vec::with_capacity(fragments.len());
    for fragment in fragments {
        match (out.last_mut(), fragment) {
            (Some(Fragment::Literal(prev)), Fragment::Literal(next)) => prev.push_str(&next),
            (_, fragment) => out.push(fragment),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_whole_string_reference() {
        let t = parse_value_template("{color.base.white}").unwrap();
        assert_eq!(
            t.as_single_reference(),
            Some(&TokenPath::from("color.base.white"))
        );
    }

    #[test]
    fn test_embedded_references_keep_literal_text() {
        let t = parse_value_template("linear-gradient(to right, {color.a}, {color.b})").unwrap();
        assert_eq!(
            t.fragments,
            vec![
                Fragment::Literal("linear-gradient(to right, ".to_string()),
                Fragment::Reference(TokenPath::from("color.a")),
                Fragment::Literal(", ".to_string()),
                Fragment::Reference(TokenPath::from("color.b")),
                Fragment::Literal(")".to_string()),
            ]
        );
        assert!(t.as_single_reference().is_none());
    }

    #[test]
    fn test_stray_braces_are_literal() {
        let t = parse_value_template("a { b } {c").unwrap();
        assert_eq!(t.fragments, vec![Fragment::Literal("a { b } {c".to_string())]);
        assert!(!t.has_references());
    }

    #[test]
    fn test_plain_and_empty_strings() {
        assert!(parse_value_template("").unwrap().fragments.is_empty());
        assert!(!parse_value_template("#ffffff").unwrap().has_references());
        assert!(parse_value_template("1px solid {color.border}").unwrap().has_references());
    }

    #[test]
    fn test_reference_with_trailing_text_is_embedded() {
        let t = parse_value_template("{spacing.md}px").unwrap();
        assert!(t.as_single_reference().is_none());
        assert!(t.has_references());
        let empty = parse_value_template("{}").unwrap();
        assert!(!empty.has_references());
    }
}
