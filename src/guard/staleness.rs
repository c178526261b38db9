//! Decides whether a build step needs to run at all.

use std::path::{Path, PathBuf};
use std::time::SystemTime;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Staleness {
    /// Every expected output exists and is at least as new as every source.
    Fresh,
    Stale(StaleReason),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StaleReason {
    MissingOutput(PathBuf),
    /// A source file's modification time is unknown.
    UnknownSourceTime(String),
    SourcesNewer,
}

impl Staleness {
    pub fn is_stale(&self) -> bool {
        matches!(self, Staleness::Stale(_))
    }
}

fn modified(path: &Path) -> Option<SystemTime> {
    std::fs::metadata(path).and_then(|m| m.modified()).ok()
}

/// Compares source modification times against the expected outputs.
///
/// Any missing output makes the step stale unconditionally. Otherwise the
/// step is stale iff the newest source is newer than the newest output.
pub fn check_staleness<'a, I>(sources: I, outputs: &[PathBuf]) -> Staleness
where
    I: IntoIterator<Item = (&'a str, Option<SystemTime>)>,
{
    let mut newest_output = None;
    for output in outputs {
        match modified(output) {
            Some(time) => newest_output = newest_output.max(Some(time)),
            None => return Staleness::Stale(StaleReason::MissingOutput(output.clone())),
        }
    }

    let mut newest_source = None;
    for (path, time) in sources {
        match time {
            Some(time) => newest_source = newest_source.max(Some(time)),
            None => return Staleness::Stale(StaleReason::UnknownSourceTime(path.to_string())),
        }
    }

    match (newest_source, newest_output) {
        (Some(source), Some(output)) if source > output => Staleness::Stale(StaleReason::SourcesNewer),
        _ => Staleness::Fresh,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::File;
    use std::time::Duration;

    fn check_paths(sources: &[PathBuf], outputs: &[PathBuf]) -> Staleness {
        let labels: Vec<(String, Option<SystemTime>)> = sources
            .iter()
            .map(|p| (p.display().to_string(), modified(p)))
            .collect();
        check_staleness(labels.iter().map(|(p, t)| (p.as_str(), *t)), outputs)
    }

    fn touch(path: &Path, time: SystemTime) {
        std::fs::write(path, "x").unwrap();
        File::options().write(true).open(path).unwrap().set_modified(time).unwrap();
    }

    #[test]
    fn test_missing_output_is_stale() {
        let dir = tempfile::tempdir().unwrap();
        let source = dir.path().join("global.json");
        touch(&source, SystemTime::now());
        let output = dir.path().join("variables-light.css");
        assert_eq!(
            check_paths(&[source], &[output.clone()]),
            Staleness::Stale(StaleReason::MissingOutput(output))
        );
    }

    #[test]
    fn test_newer_source_is_stale_and_older_is_fresh() {
        let dir = tempfile::tempdir().unwrap();
        let base = SystemTime::now() - Duration::from_secs(3600);
        let source = dir.path().join("global.json");
        let output = dir.path().join("variables-light.css");

        touch(&source, base);
        touch(&output, base + Duration::from_secs(60));
        assert_eq!(check_paths(&[source.clone()], &[output.clone()]), Staleness::Fresh);

        touch(&source, base + Duration::from_secs(120));
        assert_eq!(
            check_paths(&[source], &[output]),
            Staleness::Stale(StaleReason::SourcesNewer)
        );
    }

    #[test]
    fn test_newest_output_counts() {
        let dir = tempfile::tempdir().unwrap();
        let base = SystemTime::now() - Duration::from_secs(3600);
        let source = dir.path().join("spacing.json");
        let old = dir.path().join("a.js");
        let new = dir.path().join("b.js");
        touch(&old, base);
        touch(&source, base + Duration::from_secs(10));
        touch(&new, base + Duration::from_secs(20));
        assert!(!check_paths(&[source], &[old, new]).is_stale());
    }

    #[test]
    fn test_unknown_source_time_is_stale() {
        let dir = tempfile::tempdir().unwrap();
        let output = dir.path().join("a.css");
        touch(&output, SystemTime::now());
        let staleness = check_staleness([("color/global.json", None)], &[output]);
        assert_eq!(
            staleness,
            Staleness::Stale(StaleReason::UnknownSourceTime("color/global.json".to_string()))
        );
    }
}
