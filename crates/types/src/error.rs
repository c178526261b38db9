use thiserror::Error;

/// Errors raised while building or merging token trees.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum TreeError {
    #[error("Token '{path}' is a token in '{existing}' but a group in '{incoming}' (or vice versa)")]
    TokenShapeConflict {
        path: String,
        existing: String,
        incoming: String,
    },

    #[error("Invalid token file '{origin}': {message}")]
    InvalidTokenFile { origin: String, message: String },
}
