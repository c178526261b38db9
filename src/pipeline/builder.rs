// src/pipeline/builder.rs
use super::config::BuildConfig;
use super::orchestrator::TokenPipeline;
use crate::error::BuildError;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use swatch_source::{FilesystemSource, SourceProvider};
use swatch_types::{Brand, Mode};

/// A builder for creating a `TokenPipeline`.
#[derive(Default)]
pub struct PipelineBuilder {
    config: BuildConfig,
    provider: Option<Arc<dyn SourceProvider>>,
}

impl PipelineBuilder {
    /// Creates a new `PipelineBuilder` with default settings.
    pub fn new() -> Self {
        Default::default()
    }

    /// Starts from an existing configuration.
    pub fn from_config(config: BuildConfig) -> Self {
        Self {
            config,
            provider: None,
        }
    }

    /// Replaces the configuration with one loaded from a JSON file.
    pub fn with_config_file<P: AsRef<Path>>(mut self, path: P) -> Result<Self, BuildError> {
        self.config = BuildConfig::from_file(path)?;
        Ok(self)
    }

    pub fn with_source_root<P: Into<PathBuf>>(mut self, path: P) -> Self {
        self.config.source_root = path.into();
        self
    }

    pub fn with_output_root<P: Into<PathBuf>>(mut self, path: P) -> Self {
        self.config.output_root = path.into();
        self
    }

    pub fn with_brands(mut self, brands: &[Brand]) -> Self {
        self.config.brands = brands.to_vec();
        self
    }

    pub fn with_modes(mut self, modes: &[Mode]) -> Self {
        self.config.modes = modes.to_vec();
        self
    }

    /// Enables or disables the `theme-{mode}.css` Tailwind variant.
    pub fn with_tailwind_theme(mut self, enabled: bool) -> Self {
        self.config.tailwind_theme = enabled;
        self
    }

    /// Bypasses the staleness check. The metadata gate still applies.
    pub fn with_force(mut self, force: bool) -> Self {
        self.config.force = force;
        self
    }

    pub fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.config.dry_run = dry_run;
        self
    }

    pub fn with_metadata_file(mut self, file: impl Into<String>) -> Self {
        self.config.metadata_file = file.into();
        self
    }

    /// Reads sources from `provider` instead of `source_root` on disk.
    pub fn with_provider(mut self, provider: Arc<dyn SourceProvider>) -> Self {
        self.provider = Some(provider);
        self
    }

    /// Validates the configuration and creates the `TokenPipeline`.
    pub fn build(self) -> Result<TokenPipeline, BuildError> {
        self.config.validate()?;
        let provider: Arc<dyn SourceProvider> = match self.provider {
            Some(provider) => provider,
            None => {
                if !self.config.source_root.is_dir() {
                    return Err(BuildError::Config(format!(
                        "source root '{}' is not a directory",
                        self.config.source_root.display()
                    )));
                }
                Arc::new(FilesystemSource::new(&self.config.source_root))
            }
        };
        Ok(TokenPipeline::new(self.config, provider))
    }
}
