//! The closed brand and mode enumerations that select token sources.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A product identity with its own token overrides.
#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "lowercase")]
pub enum Brand {
    A,
    B,
}

impl Brand {
    pub const ALL: [Brand; 2] = [Brand::A, Brand::B];

    /// The slug used in source and output file names.
    pub fn slug(self) -> &'static str {
        match self {
            Brand::A => "a",
            Brand::B => "b",
        }
    }
}

impl fmt::Display for Brand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.slug())
    }
}

impl FromStr for Brand {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "a" => Ok(Brand::A),
            "b" => Ok(Brand::B),
            other => Err(format!("Unknown brand '{}', expected one of: a, b", other)),
        }
    }
}

/// A color scheme selecting among mode-specific overrides.
#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    Light,
    Dark,
}

impl Mode {
    pub const ALL: [Mode; 2] = [Mode::Light, Mode::Dark];

    pub fn slug(self) -> &'static str {
        match self {
            Mode::Light => "light",
            Mode::Dark => "dark",
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.slug())
    }
}

impl FromStr for Mode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "light" => Ok(Mode::Light),
            "dark" => Ok(Mode::Dark),
            other => Err(format!("Unknown mode '{}', expected one of: light, dark", other)),
        }
    }
}

/// Selects which source files participate in one build.
///
/// Some token domains (fonts, typography) are brand-only; their key carries
/// no mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BuildKey {
    pub brand: Brand,
    pub mode: Option<Mode>,
}

impl BuildKey {
    pub fn brand(brand: Brand) -> Self {
        Self { brand, mode: None }
    }

    pub fn themed(brand: Brand, mode: Mode) -> Self {
        Self {
            brand,
            mode: Some(mode),
        }
    }

    /// Enumerates keys in the deterministic build order: for each brand, the
    /// brand-only key first, then one key per mode.
    pub fn matrix(brands: &[Brand], modes: &[Mode]) -> Vec<BuildKey> {
        let mut keys = Vec::with_capacity(brands.len() * (modes.len() + 1));
        for &brand in brands {
            keys.push(BuildKey::brand(brand));
            for &mode in modes {
                keys.push(BuildKey::themed(brand, mode));
            }
        }
        keys
    }
}

impl fmt::Display for BuildKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.mode {
            Some(mode) => write!(f, "brand-{}/{}", self.brand, mode),
            None => write!(f, "brand-{}", self.brand),
        }
    }
}
