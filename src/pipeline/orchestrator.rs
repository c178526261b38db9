// src/pipeline/orchestrator.rs
use super::config::BuildConfig;
use super::plan::emitters_for;
use super::report::{BuildReport, KeyOutcome, KeyReport, Stage};
use crate::error::BuildError;
use crate::guard::{Staleness, check_staleness, hash_outputs, update_metadata};
use log::{debug, error, info, warn};
use std::io::ErrorKind;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Instant;
use swatch_emit::{Artifact, Emit, Emitter};
use swatch_reference::ResolvedTree;
use swatch_source::{SourceProvider, load_tree, resolve_sources};
use swatch_types::BuildKey;

/// The token build pipeline.
///
/// Runs `ResolveSources -> CheckStaleness -> LoadAndMerge -> ResolveReferences
/// -> Emit -> WriteArtifacts` for every build key in a fixed order. A failing
/// key never stops the others; failures are collected in the [`BuildReport`].
pub struct TokenPipeline {
    config: BuildConfig,
    provider: Arc<dyn SourceProvider>,
}

impl TokenPipeline {
    pub fn new(config: BuildConfig, provider: Arc<dyn SourceProvider>) -> Self {
        Self { config, provider }
    }

    pub fn config(&self) -> &BuildConfig {
        &self.config
    }

    /// Every build key of this run, in processing order.
    pub fn keys(&self) -> Vec<BuildKey> {
        BuildKey::matrix(&self.config.brands, &self.config.modes)
    }

    /// Every output file this run is expected to produce, excluding metadata.
    pub fn expected_outputs(&self) -> Vec<PathBuf> {
        self.keys()
            .iter()
            .flat_map(|key| emitters_for(key, &self.config))
            .map(|e| self.config.output_root.join(e.output_path()))
            .collect()
    }

    /// Runs every build key and then the metadata gate.
    ///
    /// Per-key failures are reported, not returned; the `Err` case is kept
    /// for failures of the run as a whole (hashing or writing metadata).
    pub fn run(&self) -> Result<BuildReport, BuildError> {
        let start = Instant::now();
        let outputs = self.expected_outputs();
        let before = hash_outputs(&outputs)?;
        info!(
            "Building {} keys from '{}' with {} source provider",
            self.keys().len(),
            self.config.source_root.display(),
            self.provider.name()
        );

        let mut report = BuildReport::default();
        for key in self.keys() {
            report.keys.push(self.build_key(&key));
        }

        if self.config.dry_run {
            info!("Dry run: skipping build metadata");
        } else {
            let after = hash_outputs(&outputs)?;
            let artifacts = outputs
                .iter()
                .filter(|p| p.is_file())
                .filter_map(|p| p.strip_prefix(&self.config.output_root).ok())
                .map(|p| p.to_string_lossy().replace('\\', "/"))
                .collect();
            report.metadata_rewritten = update_metadata(&self.config.metadata_path(), &before, &after, artifacts)?;
            report.content_hash = Some(after.hash);
        }

        info!("Finished in {:.2?}", start.elapsed());
        Ok(report)
    }

    /// Runs the per-key state machine.
    pub fn build_key(&self, key: &BuildKey) -> KeyReport {
        let mut report = KeyReport::new(*key);
        info!("[{}] {}", key, Stage::ResolveSources);
        let plan = match resolve_sources(self.provider.as_ref(), key) {
            Ok(plan) => plan,
            Err(e) => {
                report.fail(Stage::ResolveSources, None, e);
                return report;
            }
        };
        report.diagnostics.extend(plan.diagnostics.iter().cloned());

        let emitters = emitters_for(key, &self.config);
        if !self.config.force {
            info!("[{}] {}", key, Stage::CheckStaleness);
            let outputs: Vec<PathBuf> = emitters
                .iter()
                .map(|e| self.config.output_root.join(e.output_path()))
                .collect();
            let sources = plan.paths().map(|p| (p, self.provider.modified(p)));
            match check_staleness(sources, &outputs) {
                Staleness::Fresh => {
                    info!("[{}] outputs are up to date; skipping", key);
                    report.outcome = KeyOutcome::UpToDate;
                    return report;
                }
                Staleness::Stale(reason) => debug!("[{}] stale: {:?}", key, reason),
            }
        }

        info!("[{}] {} ({} files)", key, Stage::LoadAndMerge, plan.files.len());
        let tree = match load_tree(self.provider.as_ref(), &plan) {
            Ok(tree) => tree,
            Err(e) => {
                report.fail(Stage::LoadAndMerge, None, e);
                return report;
            }
        };

        info!("[{}] {} ({} tokens)", key, Stage::ResolveReferences, tree.len());
        let resolved = ResolvedTree::resolve(tree);
        for (path, err) in resolved.failures() {
            debug!("[{}] '{}' unresolved: {}", key, path, err);
        }

        info!("[{}] {} ({} emitters)", key, Stage::Emit, emitters.len());
        let artifacts = self.emit_all(&emitters, &resolved, &mut report);

        if self.config.dry_run {
            report.artifacts = artifacts.into_iter().map(|a| a.path).collect();
            return report;
        }
        info!("[{}] {}", key, Stage::WriteArtifacts);
        for artifact in artifacts {
            match self.write_artifact(&artifact) {
                Ok(()) => report.artifacts.push(artifact.path),
                Err(e) => {
                    self.discard_output(&artifact.path);
                    report.fail(Stage::WriteArtifacts, Some(artifact.path), e)
                }
            }
        }
        report
    }

    fn emit_all(&self, emitters: &[Emitter], resolved: &ResolvedTree, report: &mut KeyReport) -> Vec<Artifact> {
        let mut artifacts = Vec::with_capacity(emitters.len());
        for emitter in emitters {
            match emitter.emit(resolved) {
                Ok(artifact) => {
                    for diagnostic in &artifact.diagnostics {
                        warn!("[{}] {}: {}", report.key, artifact.path, diagnostic);
                    }
                    report.diagnostics.extend(artifact.diagnostics.iter().cloned());
                    artifacts.push(artifact);
                }
                Err(e) => {
                    let target = emitter.output_path().to_string();
                    self.discard_output(&target);
                    report.fail(Stage::Emit, Some(target), e)
                }
            }
        }
        artifacts
    }

    /// Deletes a failed artifact's output from an earlier run, so the key
    /// stays stale until every one of its emitters succeeds.
    fn discard_output(&self, target: &str) {
        if self.config.dry_run {
            return;
        }
        let path = self.config.output_root.join(target);
        match std::fs::remove_file(&path) {
            Ok(()) => warn!("Removed outdated '{}' after its emitter failed", path.display()),
            Err(e) if e.kind() == ErrorKind::NotFound => {}
            Err(e) => error!("Could not remove outdated '{}': {}", path.display(), e),
        }
    }

    fn write_artifact(&self, artifact: &Artifact) -> Result<(), BuildError> {
        let path = self.config.output_root.join(&artifact.path);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| BuildError::io(parent, e))?;
        }
        std::fs::write(&path, &artifact.contents).map_err(|e| BuildError::io(&path, e))?;
        debug!("Wrote '{}' ({} bytes)", path.display(), artifact.contents.len());
        Ok(())
    }
}
