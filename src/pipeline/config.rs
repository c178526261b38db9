use crate::error::BuildError;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use swatch_types::{Brand, Mode};

/// The default name of the configuration file looked up by the CLI.
pub const CONFIG_FILE: &str = "swatch.json";

/// Settings for one pipeline run.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase", default, deny_unknown_fields)]
pub struct BuildConfig {
    /// Directory holding the JSON token sources.
    pub source_root: PathBuf,
    /// Directory generated artifacts are written under.
    pub output_root: PathBuf,
    pub brands: Vec<Brand>,
    pub modes: Vec<Mode>,
    /// Also emit `theme-{mode}.css` with a Tailwind `@theme` block.
    pub tailwind_theme: bool,
    /// Run every key even when its outputs are up to date.
    pub force: bool,
    /// Run every stage except writing artifacts.
    pub dry_run: bool,
    /// Relative to `output_root`.
    pub metadata_file: String,
}

impl Default for BuildConfig {
    fn default() -> Self {
        Self {
            source_root: PathBuf::from("tokens"),
            output_root: PathBuf::from("build"),
            brands: Brand::ALL.to_vec(),
            modes: Mode::ALL.to_vec(),
            tailwind_theme: true,
            force: false,
            dry_run: false,
            metadata_file: "build-info.json".to_string(),
        }
    }
}

impl BuildConfig {
    /// Loads a configuration file. Missing fields take their defaults;
    /// relative roots are taken relative to the file's directory.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, BuildError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|e| BuildError::io(path, e))?;
        let mut config: BuildConfig = serde_json::from_str(&text)
            .map_err(|e| BuildError::Config(format!("'{}': {}", path.display(), e)))?;
        if let Some(base) = path.parent() {
            config.source_root = base.join(&config.source_root);
            config.output_root = base.join(&config.output_root);
        }
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), BuildError> {
        if self.brands.is_empty() {
            return Err(BuildError::Config("at least one brand is required".to_string()));
        }
        if self.modes.is_empty() {
            return Err(BuildError::Config("at least one mode is required".to_string()));
        }
        let mut brands = self.brands.clone();
        brands.sort();
        brands.dedup();
        let mut modes = self.modes.clone();
        modes.sort();
        modes.dedup();
        if brands.len() != self.brands.len() || modes.len() != self.modes.len() {
            return Err(BuildError::Config("brands and modes must not repeat".to_string()));
        }
        let metadata = Path::new(&self.metadata_file);
        if self.metadata_file.is_empty() || metadata.is_absolute() {
            return Err(BuildError::Config(
                "metadataFile must be a path relative to the output root".to_string(),
            ));
        }
        Ok(())
    }

    pub fn metadata_path(&self) -> PathBuf {
        self.output_root.join(&self.metadata_file)
    }
}
