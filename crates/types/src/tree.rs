//! The merged token tree: a typed recursive `Leaf | Group` structure.
//!
//! Trees are built from parsed JSON source files and merged deeply in source
//! order. Children keep their authoring order, so every traversal is stable
//! across runs for a given set of source files.

use crate::error::TreeError;
use crate::path::TokenPath;
use crate::token::Token;
use indexmap::IndexMap;
use serde_json::{Map, Value};
use std::sync::Arc;

#[derive(Debug, Clone, PartialEq)]
pub enum TokenNode {
    Leaf(Token),
    Group(TokenGroup),
}

impl TokenNode {
    fn origin_label(&self) -> String {
        match self {
            TokenNode::Leaf(token) => token.origin_label().to_string(),
            TokenNode::Group(group) => group
                .first_origin()
                .unwrap_or_else(|| "<memory>".to_string()),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct TokenGroup {
    pub children: IndexMap<String, TokenNode>,
}

impl TokenGroup {
    fn first_origin(&self) -> Option<String> {
        self.children.values().find_map(|child| match child {
            TokenNode::Leaf(token) => token.origin.as_deref().map(str::to_string),
            TokenNode::Group(group) => group.first_origin(),
        })
    }

    fn collect<'a>(&'a self, out: &mut Vec<&'a Token>) {
        for child in self.children.values() {
            match child {
                TokenNode::Leaf(token) => out.push(token),
                TokenNode::Group(group) => group.collect(out),
            }
        }
    }

    fn for_each_mut(&mut self, f: &mut dyn FnMut(&mut Token)) {
        for child in self.children.values_mut() {
            match child {
                TokenNode::Leaf(token) => f(token),
                TokenNode::Group(group) => group.for_each_mut(f),
            }
        }
    }

    fn merge(&mut self, other: TokenGroup, at: &TokenPath) -> Result<(), TreeError> {
        for (key, incoming) in other.children {
            let path = at.child(key.as_str());
            match self.children.get_mut(&key) {
                None => {
                    self.children.insert(key, incoming);
                }
                Some(existing) => {
                    let same_shape = matches!(
                        (&*existing, &incoming),
                        (TokenNode::Leaf(_), TokenNode::Leaf(_))
                            | (TokenNode::Group(_), TokenNode::Group(_))
                    );
                    if !same_shape {
                        return Err(TreeError::TokenShapeConflict {
                            path: path.dotted(),
                            existing: existing.origin_label(),
                            incoming: incoming.origin_label(),
                        });
                    }
                    match (existing, incoming) {
                        (TokenNode::Group(mine), TokenNode::Group(theirs)) => {
                            mine.merge(theirs, &path)?;
                        }
                        (slot, incoming) => *slot = incoming,
                    }
                }
            }
        }
        Ok(())
    }

    fn filter(&self, keep: &dyn Fn(&Token) -> bool) -> TokenGroup {
        let mut children = IndexMap::new();
        for (key, child) in &self.children {
            match child {
                TokenNode::Leaf(token) if keep(token) => {
                    children.insert(key.clone(), TokenNode::Leaf(token.clone()));
                }
                TokenNode::Leaf(_) => {}
                TokenNode::Group(group) => {
                    let filtered = group.filter(keep);
                    if !filtered.children.is_empty() {
                        children.insert(key.clone(), TokenNode::Group(filtered));
                    }
                }
            }
        }
        TokenGroup { children }
    }

    fn to_value(&self, leaf: &dyn Fn(&Token) -> Option<Value>) -> Value {
        let mut map = Map::new();
        for (key, child) in &self.children {
            let value = match child {
                TokenNode::Leaf(token) => leaf(token),
                TokenNode::Group(group) => Some(group.to_value(leaf)),
            };
            if let Some(value) = value {
                map.insert(key.clone(), value);
            }
        }
        Value::Object(map)
    }
}

/// An ordered merge of one or more token source files.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TokenTree {
    root: TokenGroup,
}

impl TokenTree {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a tree from one parsed source file.
    ///
    /// Objects carrying a `value`/`$value` key become leaves; every other object
    /// becomes a group. Scalars outside a leaf are rejected.
    pub fn from_json(json: &Value, origin: Option<&str>) -> Result<Self, TreeError> {
        let origin: Option<Arc<str>> = origin.map(Arc::from);
        let object = json.as_object().ok_or_else(|| TreeError::InvalidTokenFile {
            origin: label(&origin),
            message: "top-level value must be an object".to_string(),
        })?;
        let root = build_group(object, &TokenPath::default(), &origin)?;
        Ok(Self { root })
    }

    /// Deep-merges `other` into this tree. Later leaves override earlier ones
    /// token by token; a leaf meeting a group at the same path is an error.
    pub fn merge(&mut self, other: TokenTree) -> Result<(), TreeError> {
        self.root.merge(other.root, &TokenPath::default())
    }

    /// Inserts a single token, creating intermediate groups as needed.
    pub fn insert(&mut self, token: Token) -> Result<(), TreeError> {
        let mut single = TokenGroup::default();
        let segments = token.path.segments().to_vec();
        let Some((last, parents)) = segments.split_last() else {
            return Err(TreeError::InvalidTokenFile {
                origin: token.origin_label().to_string(),
                message: "token path must not be empty".to_string(),
            });
        };
        let mut node = TokenNode::Leaf(token);
        let mut key = last.clone();
        for parent in parents.iter().rev() {
            let mut group = TokenGroup::default();
            group.children.insert(key, node);
            node = TokenNode::Group(group);
            key = parent.clone();
        }
        single.children.insert(key, node);
        self.root.merge(single, &TokenPath::default())
    }

    pub fn root(&self) -> &TokenGroup {
        &self.root
    }

    /// All leaves, depth-first in authoring order.
    pub fn tokens(&self) -> Vec<&Token> {
        let mut out = Vec::new();
        self.root.collect(&mut out);
        out
    }

    pub fn for_each_token_mut(&mut self, mut f: impl FnMut(&mut Token)) {
        self.root.for_each_mut(&mut f);
    }

    pub fn len(&self) -> usize {
        self.tokens().len()
    }

    pub fn is_empty(&self) -> bool {
        self.root.children.is_empty()
    }

    pub fn node(&self, path: &TokenPath) -> Option<&TokenNode> {
        let (first, rest) = path.segments().split_first()?;
        let mut node = self.root.children.get(first)?;
        for segment in rest {
            match node {
                TokenNode::Group(group) => node = group.children.get(segment)?,
                TokenNode::Leaf(_) => return None,
            }
        }
        Some(node)
    }

    /// Looks up a leaf by path.
    pub fn get(&self, path: &TokenPath) -> Option<&Token> {
        match self.node(path)? {
            TokenNode::Leaf(token) => Some(token),
            TokenNode::Group(_) => None,
        }
    }

    /// Returns a new tree holding only the leaves accepted by `keep`.
    pub fn filter(&self, keep: impl Fn(&Token) -> bool) -> TokenTree {
        TokenTree {
            root: self.root.filter(&keep),
        }
    }

    /// Returns the subtree under the given top-level domains.
    pub fn domains(&self, roots: &[&str]) -> TokenTree {
        self.filter(|token| token.path.root().is_some_and(|r| roots.contains(&r)))
    }

    /// Serializes the tree as nested JSON, mapping each leaf through `leaf`.
    /// Leaves mapped to `None` are omitted.
    pub fn to_value(&self, leaf: impl Fn(&Token) -> Option<Value>) -> Value {
        self.root.to_value(&leaf)
    }
}

fn label(origin: &Option<Arc<str>>) -> String {
    origin.as_deref().unwrap_or("<memory>").to_string()
}

fn build_group(
    object: &Map<String, Value>,
    at: &TokenPath,
    origin: &Option<Arc<str>>,
) -> Result<TokenGroup, TreeError> {
    let mut group = TokenGroup::default();
    for (key, value) in object {
        let path = at.child(key.as_str());
        let node = match value {
            Value::Object(child) => {
                match Token::from_leaf_object(path.clone(), child, origin.as_ref()) {
                    Some(token) => TokenNode::Leaf(token),
                    None => TokenNode::Group(build_group(child, &path, origin)?),
                }
            }
            other => {
                return Err(TreeError::InvalidTokenFile {
                    origin: label(origin),
                    message: format!(
                        "'{}' holds a bare {} outside a token; wrap it as {{ \"value\": ... }}",
                        path,
                        kind_name(other)
                    ),
                });
            }
        };
        group.children.insert(key.clone(), node);
    }
    Ok(group)
}

fn kind_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn tree(json: Value, origin: &str) -> TokenTree {
        TokenTree::from_json(&json, Some(origin)).unwrap()
    }

    #[test]
    fn test_leaf_detection_and_metadata() {
        let t = tree(
            json!({
                "color": {
                    "base": {
                        "white": { "value": "#ffffff", "type": "color", "description": "Pure white" }
                    }
                }
            }),
            "global.json",
        );
        let token = t.get(&TokenPath::from("color.base.white")).unwrap();
        assert_eq!(token.raw, json!("#ffffff"));
        assert_eq!(token.metadata.kind.as_deref(), Some("color"));
        assert_eq!(token.metadata.description.as_deref(), Some("Pure white"));
        assert_eq!(token.origin_label(), "global.json");
        assert!(t.get(&TokenPath::from("color.base")).is_none());
    }

    #[test]
    fn test_dtcg_value_key_is_a_leaf() {
        let t = tree(json!({ "radius": { "sm": { "$value": "4px" } } }), "radius.json");
        assert_eq!(t.get(&TokenPath::from("radius.sm")).unwrap().raw, json!("4px"));
    }

    #[test]
    fn test_merge_is_deep_and_later_leaf_wins() {
        let mut base = tree(
            json!({ "color": { "text": { "primary": { "value": "#000" }, "muted": { "value": "#666" } } } }),
            "global.json",
        );
        let over = tree(
            json!({ "color": { "text": { "primary": { "value": "{color.base.white}" } } } }),
            "brand-a-dark.json",
        );
        base.merge(over).unwrap();

        let primary = base.get(&TokenPath::from("color.text.primary")).unwrap();
        assert_eq!(primary.raw, json!("{color.base.white}"));
        assert_eq!(primary.origin_label(), "brand-a-dark.json");
        // Sibling from the earlier file survives.
        assert_eq!(
            base.get(&TokenPath::from("color.text.muted")).unwrap().raw,
            json!("#666")
        );
        // Override keeps the original position.
        let order: Vec<String> = base.tokens().iter().map(|t| t.path.dotted()).collect();
        assert_eq!(order, vec!["color.text.primary", "color.text.muted"]);
    }

    #[test]
    fn test_merge_rejects_shape_conflict() {
        let mut base = tree(json!({ "color": { "brand": { "value": "#f00" } } }), "global.json");
        let over = tree(
            json!({ "color": { "brand": { "primary": { "value": "#0f0" } } } }),
            "brand-b.json",
        );
        let err = base.merge(over).unwrap_err();
        match err {
            TreeError::TokenShapeConflict { path, existing, incoming } => {
                assert_eq!(path, "color.brand");
                assert_eq!(existing, "global.json");
                assert_eq!(incoming, "brand-b.json");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_bare_scalar_is_rejected() {
        let err = TokenTree::from_json(&json!({ "spacing": { "sm": "4px" } }), Some("spacing.json"))
            .unwrap_err();
        assert!(err.to_string().contains("spacing.sm"));
        assert!(err.to_string().contains("spacing.json"));
    }

    #[test]
    fn test_filter_by_domain_drops_empty_groups() {
        let t = tree(
            json!({
                "color": { "a": { "value": "#111" } },
                "spacing": { "sm": { "value": "4px" } }
            }),
            "x.json",
        );
        let colors = t.domains(&["color"]);
        assert_eq!(colors.len(), 1);
        assert!(colors.root().children.get("spacing").is_none());
    }

    #[test]
    fn test_insert_and_to_value() {
        let mut t = TokenTree::new();
        t.insert(Token::new(TokenPath::from("spacing.sm"), json!("4px"))).unwrap();
        t.insert(Token::new(TokenPath::from("spacing.md"), json!("8px"))).unwrap();
        let value = t.to_value(|token| Some(token.value().clone()));
        assert_eq!(value, json!({ "spacing": { "sm": "4px", "md": "8px" } }));
    }
}
