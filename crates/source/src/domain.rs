//! Token domains and the file naming convention each one follows.

use serde::{Deserialize, Serialize};
use std::fmt;
use swatch_types::{Brand, BuildKey, Mode};

/// The palette file every brand color references.
pub const GLOBAL_COLORS: &str = "color/global.json";

/// A family of tokens sharing one top-level namespace and one source policy.
#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum TokenDomain {
    Color,
    Spacing,
    Radius,
    Breakpoint,
    Font,
    Typography,
}

impl TokenDomain {
    /// Domains built once per brand, independent of mode.
    pub const BRAND_ONLY: [TokenDomain; 3] =
        [TokenDomain::Typography, TokenDomain::Font, TokenDomain::Breakpoint];

    /// Domains built once per (brand, mode).
    pub const THEMED: [TokenDomain; 3] = [TokenDomain::Color, TokenDomain::Spacing, TokenDomain::Radius];

    /// The domains that participate in a build key, in merge order.
    pub fn for_key(key: &BuildKey) -> &'static [TokenDomain] {
        match key.mode {
            Some(_) => &Self::THEMED,
            None => &Self::BRAND_ONLY,
        }
    }

    /// Shared files owned by the other key shape, read so that references can
    /// cross domain boundaries (a typography token using `{spacing.sm}`).
    /// They are optional and never make a key fail.
    pub fn reference_context(key: &BuildKey) -> Vec<(TokenDomain, SourceSpec)> {
        let shared = |domain: TokenDomain| {
            domain
                .sources(key.brand, None)
                .into_iter()
                .filter(|spec| matches!(spec, SourceSpec::Shared { .. }))
                .map(move |spec| (domain, spec))
        };
        match key.mode {
            Some(_) => shared(TokenDomain::Breakpoint).collect(),
            None => {
                let mut context = vec![(
                    TokenDomain::Color,
                    SourceSpec::Shared {
                        path: GLOBAL_COLORS.to_string(),
                    },
                )];
                context.extend(shared(TokenDomain::Spacing));
                context.extend(shared(TokenDomain::Radius));
                context
            }
        }
    }

    /// The top-level namespace this domain's tokens live under.
    pub fn namespace(self) -> &'static str {
        match self {
            TokenDomain::Color => "color",
            TokenDomain::Spacing => "spacing",
            TokenDomain::Radius => "radius",
            TokenDomain::Breakpoint => "breakpoint",
            TokenDomain::Font => "font",
            TokenDomain::Typography => "typography",
        }
    }

    /// The files this domain reads for a brand and, where relevant, a mode.
    pub fn sources(self, brand: Brand, mode: Option<Mode>) -> Vec<SourceSpec> {
        let b = brand.slug();
        match self {
            TokenDomain::Color => {
                let mut specs = vec![SourceSpec::Required {
                    path: GLOBAL_COLORS.to_string(),
                    description: "global color palettes referenced by brand colors".to_string(),
                }];
                let generic = format!("color/brand-{}.json", b);
                specs.push(match mode {
                    Some(mode) => SourceSpec::ModeOverride {
                        specific: format!("color/brand-{}-{}.json", b, mode.slug()),
                        generic,
                    },
                    None => SourceSpec::Shared { path: generic },
                });
                specs
            }
            TokenDomain::Spacing => vec![SourceSpec::Shared {
                path: "spacing.json".to_string(),
            }],
            TokenDomain::Radius => vec![SourceSpec::Shared {
                path: "radius.json".to_string(),
            }],
            TokenDomain::Breakpoint => vec![SourceSpec::Shared {
                path: "breakpoints.json".to_string(),
            }],
            TokenDomain::Font => vec![SourceSpec::Required {
                path: format!("fonts/{}.json", b),
                description: "font families and @font-face sources for the brand".to_string(),
            }],
            TokenDomain::Typography => vec![SourceSpec::Required {
                path: format!("typography/editorial/{}.json", b),
                description: "editorial typography styles for the brand".to_string(),
            }],
        }
    }
}

impl fmt::Display for TokenDomain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.namespace())
    }
}

/// How one candidate source file participates in a build.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SourceSpec {
    /// Must exist; its absence aborts the build key.
    Required { path: String, description: String },
    /// Included if present, skipped silently otherwise.
    Shared { path: String },
    /// The mode-specific file if present, else the brand-generic file, else
    /// the domain's override layer is skipped with a warning.
    ModeOverride { specific: String, generic: String },
}

impl SourceSpec {
    /// Every path this spec may read, most specific first.
    pub fn candidates(&self) -> Vec<&str> {
        match self {
            SourceSpec::Required { path, .. } | SourceSpec::Shared { path } => vec![path.as_str()],
            SourceSpec::ModeOverride { specific, generic } => vec![specific.as_str(), generic.as_str()],
        }
    }
}
