//! Token Source Loader.
//!
//! Turns a [`BuildKey`](swatch_types::BuildKey) into an ordered set of JSON
//! token files and merges them into one [`TokenTree`](swatch_types::TokenTree).
//! File access goes through a [`SourceProvider`] so the pipeline can run over
//! a directory or over an in-memory set of files.
//!
//! ## Example
//!
//! ```ignore
//! use swatch_source::{FilesystemSource, load_tree, resolve_sources};
//! use swatch_types::{Brand, BuildKey, Mode};
//!
//! let provider = FilesystemSource::new("tokens");
//! let plan = resolve_sources(&provider, &BuildKey::themed(Brand::A, Mode::Light))?;
//! let tree = load_tree(&provider, &plan)?;
//! ```

pub mod domain;
pub mod error;
pub mod loader;
pub mod plan;
pub mod provider;

pub use domain::{SourceSpec, TokenDomain};
pub use error::SourceError;
pub use loader::{load_file, load_tree};
pub use plan::{SourceFile, SourcePlan, resolve_sources};
pub use provider::{FilesystemSource, InMemorySource, SourceProvider};
