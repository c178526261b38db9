use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ReferenceError {
    #[error("Cyclic token reference while resolving '{token}': {cycle}")]
    CyclicTokenReference { token: String, cycle: String },

    #[error("Unresolved token reference '{{{reference}}}' in token '{token}' (defined in '{origin}')")]
    UnresolvedTokenReference {
        token: String,
        reference: String,
        origin: String,
    },

    #[error("Token '{token}' embeds '{{{reference}}}' inside a string, but it resolves to a composite value")]
    CompositeInString { token: String, reference: String },

    #[error("Reference parse error in '{input}': {message}")]
    Parse { input: String, message: String },
}

impl ReferenceError {
    /// True for errors a lenient emitter may replace with a `var(--...)` fallback.
    pub fn is_unresolved(&self) -> bool {
        matches!(self, ReferenceError::UnresolvedTokenReference { .. })
    }
}
