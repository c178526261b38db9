//! The secondary build-metadata artifact.

use super::content_hash::OutputDigest;
use crate::error::BuildError;
use chrono::{SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct BuildMetadata {
    pub generated_at: String,
    pub version: String,
    pub content_hash: String,
    pub artifacts: Vec<String>,
}

impl BuildMetadata {
    pub fn new(digest: &OutputDigest, artifacts: Vec<String>) -> Self {
        Self {
            generated_at: Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true),
            version: env!("CARGO_PKG_VERSION").to_string(),
            content_hash: digest.hash.clone(),
            artifacts,
        }
    }
}

/// Rewrites the metadata file only when the outputs changed across the run
/// or the file does not exist yet. Returns whether it was written.
pub fn update_metadata(
    path: &Path,
    before: &OutputDigest,
    after: &OutputDigest,
    artifacts: Vec<String>,
) -> Result<bool, BuildError> {
    if path.is_file() && !before.changed(after) {
        log::info!("Outputs unchanged; leaving '{}' untouched", path.display());
        return Ok(false);
    }
    let metadata = BuildMetadata::new(after, artifacts);
    let json = serde_json::to_string_pretty(&metadata)
        .map_err(|e| BuildError::Config(format!("cannot serialize build metadata: {}", e)))?;
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| BuildError::io(parent, e))?;
    }
    std::fs::write(path, json + "\n").map_err(|e| BuildError::io(path, e))?;
    log::info!("Wrote build metadata to '{}'", path.display());
    Ok(true)
}
