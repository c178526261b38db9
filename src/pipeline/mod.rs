//! Build orchestration.
//!
//! - [`PipelineBuilder`]: Fluent builder for constructing a token pipeline
//! - [`BuildConfig`]: Serializable run settings, loadable from `swatch.json`
//! - [`TokenPipeline`]: Runs every build key and the metadata gate
//! - [`BuildReport`]: Per-key outcomes, diagnostics and failures
//!
//! # Example
//!
//! ```ignore
//! use swatch::PipelineBuilder;
//!
//! let report = PipelineBuilder::new()
//!     .with_source_root("tokens")
//!     .with_output_root("build")
//!     .build()?
//!     .run()?;
//! report.log_summary();
//! ```

mod builder;
pub mod config;
mod orchestrator;
pub mod plan;
pub mod report;

pub use builder::PipelineBuilder;
pub use config::{BuildConfig, CONFIG_FILE};
pub use orchestrator::TokenPipeline;
pub use plan::emitters_for;
pub use report::{BuildReport, KeyOutcome, KeyReport, Stage, StageFailure};
