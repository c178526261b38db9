//! Breakpoint names and the media queries they map to.

use serde_json::Value;
use swatch_transform::{parse_px, trim_decimal};
use swatch_types::{TokenPath, TokenTree};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Breakpoint {
    Mobile,
    Tablet,
    Desktop,
}

impl Breakpoint {
    /// Emission order for responsive rules.
    pub const ORDER: [Breakpoint; 3] = [Breakpoint::Mobile, Breakpoint::Tablet, Breakpoint::Desktop];

    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "mobile" => Some(Breakpoint::Mobile),
            "tablet" => Some(Breakpoint::Tablet),
            "desktop" => Some(Breakpoint::Desktop),
            _ => None,
        }
    }

    pub fn key(self) -> &'static str {
        match self {
            Breakpoint::Mobile => "mobile",
            Breakpoint::Tablet => "tablet",
            Breakpoint::Desktop => "desktop",
        }
    }
}

/// The pixel widths at which tablet and desktop layouts begin.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MediaQueries {
    pub tablet: f64,
    pub desktop: f64,
}

impl Default for MediaQueries {
    fn default() -> Self {
        Self {
            tablet: 768.0,
            desktop: 1024.0,
        }
    }
}

impl MediaQueries {
    /// Reads `breakpoint.tablet` and `breakpoint.desktop` from a resolved
    /// tree, keeping the default for any that is absent or not a pixel size.
    pub fn from_tree(tree: &TokenTree) -> Self {
        let defaults = Self::default();
        let width = |name: &str| {
            let token = tree.get(&TokenPath::new(["breakpoint", name]))?;
            match token.value() {
                Value::Number(n) => n.as_f64(),
                Value::String(s) => parse_px(s).ok(),
                _ => None,
            }
        };
        let queries = Self {
            tablet: width("tablet").unwrap_or(defaults.tablet),
            desktop: width("desktop").unwrap_or(defaults.desktop),
        };
        if queries.tablet >= queries.desktop {
            log::warn!(
                "Breakpoint tablet ({}px) is not below desktop ({}px); using defaults",
                queries.tablet,
                queries.desktop
            );
            return defaults;
        }
        queries
    }

    pub fn query(&self, breakpoint: Breakpoint) -> String {
        let px = |v: f64| format!("{}px", trim_decimal(v));
        match breakpoint {
            Breakpoint::Mobile => format!("(max-width: {})", px(self.tablet - 1.0)),
            Breakpoint::Tablet => format!(
                "(min-width: {}) and (max-width: {})",
                px(self.tablet),
                px(self.desktop - 1.0)
            ),
            Breakpoint::Desktop => format!("(min-width: {})", px(self.desktop)),
        }
    }
}
