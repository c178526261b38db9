// src/error.rs
use std::path::PathBuf;
use swatch_emit::EmitError;
use swatch_reference::ReferenceError;
use swatch_source::SourceError;
use swatch_types::TreeError;
use thiserror::Error;

/// A comprehensive error type for the token build pipeline.
#[derive(Error, Debug)]
pub enum BuildError {
    #[error("Loading token sources failed: {0}")]
    Source(#[from] SourceError),

    #[error("Token tree is invalid: {0}")]
    Tree(#[from] TreeError),

    #[error("Reference resolution failed: {0}")]
    Reference(#[from] ReferenceError),

    #[error("Emitting failed: {0}")]
    Emit(#[from] EmitError),

    #[error("I/O error at '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Configuration error: {0}")]
    Config(String),
}

impl BuildError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        BuildError::Io {
            path: path.into(),
            source,
        }
    }
}
