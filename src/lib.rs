//! Multi-brand design-token build pipeline.
//!
//! Loads layered JSON token sources per brand and mode, resolves
//! `{path.to.token}` references, and emits CSS custom properties,
//! typography utility classes, Mantine palette modules and plain data
//! modules for code consumers. An incremental guard skips up-to-date keys
//! and only rewrites the build-metadata file when outputs changed.

pub mod error;
pub mod guard;
pub mod pipeline;

pub use error::BuildError;
pub use pipeline::{
    BuildConfig, BuildReport, KeyOutcome, KeyReport, PipelineBuilder, Stage, StageFailure, TokenPipeline,
};

pub use swatch_emit as emit;
pub use swatch_reference as reference;
pub use swatch_source as source;
pub use swatch_transform as transform;
pub use swatch_types as types;
