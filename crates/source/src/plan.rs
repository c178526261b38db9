//! Resolves a build key into the ordered list of files to merge.

use crate::domain::{SourceSpec, TokenDomain};
use crate::error::SourceError;
use crate::provider::SourceProvider;
use swatch_types::{BuildKey, Diagnostic};

/// One file selected for merging.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceFile {
    pub domain: TokenDomain,
    pub path: String,
    /// Read only so references into another key's shared files resolve.
    pub context: bool,
}

/// The files that participate in one build key, in merge order, plus the
/// optional layers that were skipped.
#[derive(Debug, Clone, PartialEq)]
pub struct SourcePlan {
    pub key: BuildKey,
    pub files: Vec<SourceFile>,
    pub diagnostics: Vec<Diagnostic>,
}

impl SourcePlan {
    pub fn paths(&self) -> impl Iterator<Item = &str> {
        self.files.iter().map(|f| f.path.as_str())
    }
}

/// Checks which source files exist for `key` and orders them for merging.
///
/// A missing required file fails the whole key. A missing mode override
/// (neither the specific nor the generic file exists) is recorded as a
/// diagnostic. Missing shared files are skipped quietly.
///
/// The plan starts with the key's reference context (see
/// [`TokenDomain::reference_context`]) so the key's own files merge over it.
pub fn resolve_sources(provider: &dyn SourceProvider, key: &BuildKey) -> Result<SourcePlan, SourceError> {
    let mut files = Vec::new();
    let mut diagnostics = Vec::new();

    for (domain, spec) in TokenDomain::reference_context(key) {
        for path in spec.candidates() {
            if provider.exists(path) {
                files.push(SourceFile {
                    domain,
                    path: path.to_string(),
                    context: true,
                });
            } else {
                log::debug!("[{}] reference context '{}' not present", key, path);
            }
        }
    }

    for &domain in TokenDomain::for_key(key) {
        for spec in domain.sources(key.brand, key.mode) {
            match &spec {
                SourceSpec::Required { path, description } => {
                    if !provider.exists(path) {
                        return Err(SourceError::MissingRequiredTokenFile {
                            path: path.clone(),
                            description: description.clone(),
                        });
                    }
                    files.push(SourceFile {
                        domain,
                        path: path.clone(),
                        context: false,
                    });
                }
                SourceSpec::Shared { path } => {
                    if provider.exists(path) {
                        files.push(SourceFile {
                            domain,
                            path: path.clone(),
                            context: false,
                        });
                    } else {
                        log::debug!("[{}] optional shared file '{}' not present", key, path);
                    }
                }
                SourceSpec::ModeOverride { .. } => {
                    let candidates = spec.candidates();
                    match candidates.iter().find(|p| provider.exists(p)) {
                        Some(path) => files.push(SourceFile {
                            domain,
                            path: path.to_string(),
                            context: false,
                        }),
                        None => {
                            let diagnostic = Diagnostic::OptionalTokenFileSkipped {
                                domain: domain.to_string(),
                                expected: candidates.iter().map(|p| p.to_string()).collect(),
                            };
                            log::warn!("[{}] {}", key, diagnostic);
                            diagnostics.push(diagnostic);
                        }
                    }
                }
            }
        }
    }

    Ok(SourcePlan {
        key: *key,
        files,
        diagnostics,
    })
}
