use crate::path::TokenPath;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::sync::Arc;

/// Keys that mark a JSON object as a token leaf rather than a group.
pub const VALUE_KEYS: [&str; 2] = ["value", "$value"];

/// Documentation fields carried alongside a token. They never influence code
/// generation except for optional comments.
#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct TokenMetadata {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
}

impl TokenMetadata {
    fn from_object(object: &Map<String, Value>) -> Self {
        let text = |keys: &[&str]| {
            keys.iter()
                .find_map(|k| object.get(*k).and_then(Value::as_str))
                .map(str::to_string)
        };
        Self {
            kind: text(&["type", "$type"]),
            description: text(&["description", "$description"]),
            comment: text(&["comment"]),
        }
    }
}

/// A single leaf entry in a token tree.
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    pub path: TokenPath,
    /// The value as authored: a literal, a `{a.b.c}` reference, a string with
    /// embedded references, or a composite object/array of those.
    pub raw: Value,
    /// Set by the reference resolver; always literal once resolution succeeds.
    pub resolved: Option<Value>,
    pub metadata: TokenMetadata,
    /// The source file that last defined this token.
    pub origin: Option<Arc<str>>,
}

impl Token {
    pub fn new(path: TokenPath, raw: Value) -> Self {
        Self {
            path,
            raw,
            resolved: None,
            metadata: TokenMetadata::default(),
            origin: None,
        }
    }

    pub fn with_origin(mut self, origin: impl Into<Arc<str>>) -> Self {
        self.origin = Some(origin.into());
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.metadata.description = Some(description.into());
        self
    }

    /// Builds a token from a leaf object. Returns `None` if the object has no value key.
    pub fn from_leaf_object(
        path: TokenPath,
        object: &Map<String, Value>,
        origin: Option<&Arc<str>>,
    ) -> Option<Self> {
        let raw = VALUE_KEYS.iter().find_map(|k| object.get(*k))?.clone();
        Some(Self {
            path,
            raw,
            resolved: None,
            metadata: TokenMetadata::from_object(object),
            origin: origin.cloned(),
        })
    }

    /// The resolved value if resolution has run, otherwise the raw value.
    pub fn value(&self) -> &Value {
        self.resolved.as_ref().unwrap_or(&self.raw)
    }

    pub fn is_resolved(&self) -> bool {
        self.resolved.is_some()
    }

    /// A human-readable origin for error messages.
    pub fn origin_label(&self) -> &str {
        self.origin.as_deref().unwrap_or("<memory>")
    }
}
