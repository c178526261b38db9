//! The ordered segment path that identifies a token within a merged tree.

use std::fmt;

/// An ordered sequence of string segments, e.g. `["color", "neutral", "500"]`.
#[derive(Debug, Clone, Default, Eq, PartialEq, Hash, PartialOrd, Ord)]
pub struct TokenPath(Vec<String>);

impl TokenPath {
    /// Creates a path from its segments.
    pub fn new<I, S>(segments: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self(segments.into_iter().map(Into::into).collect())
    }

    /// Parses a dotted path such as `color.base.white`.
    pub fn parse_dotted(dotted: &str) -> Self {
        Self::new(dotted.split('.').filter(|s| !s.is_empty()))
    }

    pub fn segments(&self) -> &[String] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// The first segment, which names the token's domain (`color`, `typography`, ...).
    pub fn root(&self) -> Option<&str> {
        self.0.first().map(String::as_str)
    }

    pub fn last(&self) -> Option<&str> {
        self.0.last().map(String::as_str)
    }

    /// Returns a new path with `segment` appended.
    pub fn child(&self, segment: impl Into<String>) -> Self {
        let mut segments = self.0.clone();
        segments.push(segment.into());
        Self(segments)
    }

    /// Returns the path without its last segment.
    pub fn parent(&self) -> Option<Self> {
        if self.0.is_empty() {
            return None;
        }
        Some(Self(self.0[..self.0.len() - 1].to_vec()))
    }

    pub fn starts_with(&self, prefix: &[&str]) -> bool {
        prefix.len() <= self.0.len() && prefix.iter().zip(&self.0).all(|(a, b)| *a == b)
    }

    /// The segments after the first `n`.
    pub fn skip(&self, n: usize) -> &[String] {
        &self.0[n.min(self.0.len())..]
    }

    /// Joins segments with `-`, the form used for CSS custom property names.
    pub fn dashed(&self) -> String {
        self.0.join("-")
    }

    pub fn dotted(&self) -> String {
        self.0.join(".")
    }
}

impl fmt::Display for TokenPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.dotted())
    }
}

impl From<&str> for TokenPath {
    fn from(s: &str) -> Self {
        Self::parse_dotted(s)
    }
}

impl From<Vec<String>> for TokenPath {
    fn from(segments: Vec<String>) -> Self {
        Self(segments)
    }
}
