//! Non-fatal conditions recorded while building. The pipeline keeps going
//! after every one of these and reports them at the end of the run.

use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Diagnostic {
    /// Neither the mode-specific nor the brand-generic file of a domain exists.
    OptionalTokenFileSkipped {
        domain: String,
        expected: Vec<String>,
    },
    /// A palette had fewer entries than the consumer expects and was padded
    /// by repeating its last entry.
    PaletteUnderLength {
        palette: String,
        authored: usize,
        padded_to: usize,
    },
    /// A semantic color was a bare scalar and was wrapped into an array.
    ScalarWrapped { token: String },
    /// An unresolved reference was replaced by a `var(--...)` indirection.
    ReferenceFallback { token: String, reference: String },
    /// A token value has a shape the emitter does not render; it was left out.
    ValueSkipped { token: String, reason: String },
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Diagnostic::OptionalTokenFileSkipped { domain, expected } => write!(
                f,
                "Skipping optional {} tokens: none of [{}] exist",
                domain,
                expected.join(", ")
            ),
            Diagnostic::PaletteUnderLength {
                palette,
                authored,
                padded_to,
            } => write!(
                f,
                "Palette '{}' has {} entries; padded to {} by repeating the last entry",
                palette, authored, padded_to
            ),
            Diagnostic::ScalarWrapped { token } => {
                write!(f, "Semantic color '{}' is a bare value; wrapped into an array", token)
            }
            Diagnostic::ReferenceFallback { token, reference } => write!(
                f,
                "Token '{}' references unknown '{}'; falling back to a CSS variable",
                token, reference
            ),
            Diagnostic::ValueSkipped { token, reason } => {
                write!(f, "Token '{}' was left out: {}", token, reason)
            }
        }
    }
}
