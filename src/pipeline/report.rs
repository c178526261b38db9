use crate::error::BuildError;
use std::fmt;
use swatch_types::{BuildKey, Diagnostic};

/// A stage of the per-key state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    ResolveSources,
    CheckStaleness,
    LoadAndMerge,
    ResolveReferences,
    Emit,
    WriteArtifacts,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Stage::ResolveSources => "resolve-sources",
            Stage::CheckStaleness => "check-staleness",
            Stage::LoadAndMerge => "load-and-merge",
            Stage::ResolveReferences => "resolve-references",
            Stage::Emit => "emit",
            Stage::WriteArtifacts => "write-artifacts",
        };
        f.write_str(name)
    }
}

/// One error, tagged with the stage and (for emit and write) the artifact it hit.
#[derive(Debug)]
pub struct StageFailure {
    pub stage: Stage,
    pub target: Option<String>,
    pub error: BuildError,
}

impl fmt::Display for StageFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.target {
            Some(target) => write!(f, "[{}] {}: {}", self.stage, target, self.error),
            None => write!(f, "[{}] {}", self.stage, self.error),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyOutcome {
    /// Every artifact was emitted (and written, unless dry-running).
    Built,
    /// Outputs were newer than every source; nothing ran.
    UpToDate,
    Failed,
}

#[derive(Debug)]
pub struct KeyReport {
    pub key: BuildKey,
    pub outcome: KeyOutcome,
    /// Artifacts produced for this key, relative to the output root.
    pub artifacts: Vec<String>,
    pub diagnostics: Vec<Diagnostic>,
    pub failures: Vec<StageFailure>,
}

impl KeyReport {
    pub(crate) fn new(key: BuildKey) -> Self {
        Self {
            key,
            outcome: KeyOutcome::Built,
            artifacts: Vec::new(),
            diagnostics: Vec::new(),
            failures: Vec::new(),
        }
    }

    pub(crate) fn fail(&mut self, stage: Stage, target: Option<String>, error: impl Into<BuildError>) {
        let failure = StageFailure {
            stage,
            target,
            error: error.into(),
        };
        log::error!("[{}] {}", self.key, failure);
        self.failures.push(failure);
        self.outcome = KeyOutcome::Failed;
    }

    pub fn is_failed(&self) -> bool {
        self.outcome == KeyOutcome::Failed
    }
}

/// The outcome of a whole run across every build key.
#[derive(Debug, Default)]
pub struct BuildReport {
    pub keys: Vec<KeyReport>,
    /// Whether the build-metadata artifact was rewritten this run.
    pub metadata_rewritten: bool,
    /// The digest of all expected outputs after the run, if it was computed.
    pub content_hash: Option<String>,
}

impl BuildReport {
    pub fn is_success(&self) -> bool {
        self.keys.iter().all(|k| !k.is_failed())
    }

    pub fn failed(&self) -> impl Iterator<Item = &KeyReport> {
        self.keys.iter().filter(|k| k.is_failed())
    }

    pub fn key(&self, key: &BuildKey) -> Option<&KeyReport> {
        self.keys.iter().find(|k| &k.key == key)
    }

    pub fn diagnostics(&self) -> impl Iterator<Item = (&BuildKey, &Diagnostic)> {
        self.keys
            .iter()
            .flat_map(|k| k.diagnostics.iter().map(move |d| (&k.key, d)))
    }

    pub fn artifacts(&self) -> impl Iterator<Item = &str> {
        self.keys.iter().flat_map(|k| k.artifacts.iter().map(String::as_str))
    }

    /// Logs one line per key and the overall result.
    pub fn log_summary(&self) {
        for key in &self.keys {
            match key.outcome {
                KeyOutcome::Built => log::info!(
                    "{}: {} artifacts, {} diagnostics",
                    key.key,
                    key.artifacts.len(),
                    key.diagnostics.len()
                ),
                KeyOutcome::UpToDate => log::info!("{}: up to date", key.key),
                KeyOutcome::Failed => {
                    log::error!("{}: failed", key.key);
                    for failure in &key.failures {
                        log::error!("  {}", failure);
                    }
                }
            }
        }
        let failed = self.failed().count();
        if failed == 0 {
            log::info!("Built {} keys", self.keys.len());
        } else {
            log::error!("{} of {} keys failed", failed, self.keys.len());
        }
    }
}
