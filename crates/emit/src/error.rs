use swatch_reference::ReferenceError;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum EmitError {
    #[error(transparent)]
    Reference(#[from] ReferenceError),

    #[error("Token '{token}' cannot be emitted: {message}")]
    UnsupportedValue { token: String, message: String },

    #[error("Serialization error: {0}")]
    Serialize(String),
}

impl From<serde_json::Error> for EmitError {
    fn from(err: serde_json::Error) -> Self {
        EmitError::Serialize(err.to_string())
    }
}

impl From<std::fmt::Error> for EmitError {
    fn from(err: std::fmt::Error) -> Self {
        EmitError::Serialize(err.to_string())
    }
}
