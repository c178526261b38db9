//! A digest over the generated outputs, used to gate the metadata artifact.

use crate::error::BuildError;
use itertools::Itertools;
use sha2::{Digest, Sha256};
use std::io::ErrorKind;
use std::path::PathBuf;

/// The hash of a set of output files as they exist on disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputDigest {
    pub hash: String,
    /// False if any of the files did not exist.
    pub complete: bool,
}

impl OutputDigest {
    /// True if the metadata artifact must be rewritten going from `self`
    /// (before a run) to `after`.
    pub fn changed(&self, after: &OutputDigest) -> bool {
        !self.complete || self.hash != after.hash
    }
}

/// Hashes the concatenated contents of `paths`, in sorted path order.
///
/// Each file contributes its path and length before its bytes, so moving
/// content between files changes the digest. Missing files contribute a
/// marker and make the digest incomplete.
pub fn hash_outputs(paths: &[PathBuf]) -> Result<OutputDigest, BuildError> {
    let mut hasher = Sha256::new();
    let mut complete = true;

    for path in paths.iter().sorted().dedup() {
        hasher.update(path.to_string_lossy().as_bytes());
        hasher.update([0u8]);
        match std::fs::read(path) {
            Ok(bytes) => {
                hasher.update((bytes.len() as u64).to_le_bytes());
                hasher.update(&bytes);
            }
            Err(e) if e.kind() == ErrorKind::NotFound => {
                complete = false;
                hasher.update(b"<missing>");
            }
            Err(e) => return Err(BuildError::io(path, e)),
        }
    }

    Ok(OutputDigest {
        hash: hex::encode(hasher.finalize()),
        complete,
    })
}
