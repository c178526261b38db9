pub mod fixtures;

use std::path::{Path, PathBuf};
use swatch::{BuildReport, PipelineBuilder};
use tempfile::TempDir;

pub type TestResult = Result<(), Box<dyn std::error::Error>>;

/// A token source tree and an output directory inside one temp dir.
pub struct Workspace {
    pub dir: TempDir,
}

impl Workspace {
    /// Writes the full two-brand fixture.
    pub fn new() -> Result<Self, Box<dyn std::error::Error>> {
        let workspace = Self { dir: tempfile::tempdir()? };
        for (path, json) in fixtures::source_files() {
            workspace.write_source(path, &serde_json::to_string_pretty(&json)?)?;
        }
        Ok(workspace)
    }

    pub fn source_root(&self) -> PathBuf {
        self.dir.path().join("tokens")
    }

    pub fn output_root(&self) -> PathBuf {
        self.dir.path().join("build")
    }

    pub fn write_source(&self, path: &str, contents: &str) -> std::io::Result<()> {
        let full = self.source_root().join(path);
        if let Some(parent) = full.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(full, contents)
    }

    pub fn remove_source(&self, path: &str) -> std::io::Result<()> {
        std::fs::remove_file(self.source_root().join(path))
    }

    pub fn output(&self, path: &str) -> std::io::Result<String> {
        std::fs::read_to_string(self.output_root().join(path))
    }

    pub fn output_path(&self, path: &str) -> PathBuf {
        self.output_root().join(path)
    }

    pub fn builder(&self) -> PipelineBuilder {
        PipelineBuilder::new()
            .with_source_root(self.source_root())
            .with_output_root(self.output_root())
    }

    pub fn run(&self) -> Result<BuildReport, swatch::BuildError> {
        self.builder().build()?.run()
    }

    pub fn run_forced(&self) -> Result<BuildReport, swatch::BuildError> {
        self.builder().with_force(true).build()?.run()
    }
}

/// Reads every file under `root`, keyed by relative path, sorted.
pub fn snapshot(root: &Path) -> Vec<(String, Vec<u8>)> {
    fn walk(dir: &Path, root: &Path, out: &mut Vec<(String, Vec<u8>)>) {
        let Ok(entries) = std::fs::read_dir(dir) else {
            return;
        };
        for entry in entries.flatten() {
            let path = entry.path();
            if path.is_dir() {
                walk(&path, root, out);
            } else if let Ok(bytes) = std::fs::read(&path) {
                let relative = path.strip_prefix(root).unwrap_or(&path).display().to_string();
                out.push((relative, bytes));
            }
        }
    }
    let mut out = Vec::new();
    walk(root, root, &mut out);
    out.sort();
    out
}
