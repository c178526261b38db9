//! Defines the parsed form of a token value string.
use swatch_types::TokenPath;

/// One piece of a parsed value string.
#[derive(Debug, Clone, PartialEq)]
pub enum Fragment {
    /// Text copied to the output unchanged (e.g. CSS function syntax).
    Literal(String),
    /// A `{path.to.token}` span.
    Reference(TokenPath),
}

/// A value string split into literal text and reference spans.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ValueTemplate {
    pub fragments: Vec<Fragment>,
}

impl ValueTemplate {
    /// Returns the target if the whole string is exactly one reference.
    /// Such values resolve to the referent's value with its type intact.
    pub fn as_single_reference(&self) -> Option<&TokenPath> {
        match self.fragments.as_slice() {
            [Fragment::Reference(path)] => Some(path),
            _ => None,
        }
    }

    pub fn has_references(&self) -> bool {
        self.fragments
            .iter()
            .any(|f| matches!(f, Fragment::Reference(_)))
    }
}
