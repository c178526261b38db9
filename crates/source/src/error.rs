use swatch_types::TreeError;
use thiserror::Error;

/// Errors raised while locating or loading token source files.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SourceError {
    #[error("Missing required token file '{path}' ({description})")]
    MissingRequiredTokenFile { path: String, description: String },

    #[error("Failed to read token file '{path}': {message}")]
    Read { path: String, message: String },

    #[error("Invalid JSON in token file '{path}': {message}")]
    Json { path: String, message: String },

    #[error(transparent)]
    Tree(#[from] TreeError),
}

impl SourceError {
    /// True for errors that abort the whole brand/mode pipeline before loading starts.
    pub fn is_missing_required(&self) -> bool {
        matches!(self, SourceError::MissingRequiredTokenFile { .. })
    }
}
