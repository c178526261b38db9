//! Resolves `{path.to.token}` references against a merged token tree.
//!
//! Resolution is recursive and memoized per token path. Composite values
//! (objects and arrays, e.g. typography bundles) are resolved element by
//! element, and strings with embedded references have each span replaced
//! independently.

use crate::ast::Fragment;
use crate::error::ReferenceError;
use crate::parser::parse_value_template;
use indexmap::IndexMap;
use serde_json::{Map, Value};
use std::collections::HashMap;
use swatch_types::{TokenPath, TokenTree};

/// What to do when a reference names no known token.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum UnresolvedPolicy {
    /// Return `UnresolvedTokenReference`.
    #[default]
    Fail,
    /// Substitute `var(--dashed-path)`, assuming the CSS variable exists.
    CssVariable,
}

/// A memoizing resolver over one token tree.
pub struct Resolver<'t> {
    tree: &'t TokenTree,
    memo: HashMap<TokenPath, Result<Value, ReferenceError>>,
    stack: Vec<TokenPath>,
    /// References replaced by a fallback during lenient resolution.
    fallbacks: Vec<(TokenPath, TokenPath)>,
}

impl<'t> Resolver<'t> {
    pub fn new(tree: &'t TokenTree) -> Self {
        Self {
            tree,
            memo: HashMap::new(),
            stack: Vec::new(),
            fallbacks: Vec::new(),
        }
    }

    /// Resolves the token at `path` to a fully literal value.
    pub fn resolve_token(&mut self, path: &TokenPath) -> Result<Value, ReferenceError> {
        if let Some(done) = self.memo.get(path) {
            return done.clone();
        }
        if let Some(pos) = self.stack.iter().position(|p| p == path) {
            let cycle = self.stack[pos..]
                .iter()
                .chain(std::iter::once(path))
                .map(TokenPath::dotted)
                .collect::<Vec<_>>()
                .join(" -> ");
            return Err(ReferenceError::CyclicTokenReference {
                token: path.dotted(),
                cycle,
            });
        }

        let tree = self.tree;
        let Some(token) = tree.get(path) else {
            return Err(ReferenceError::UnresolvedTokenReference {
                token: path.dotted(),
                reference: path.dotted(),
                origin: "<none>".to_string(),
            });
        };
        if let Some(resolved) = &token.resolved {
            return Ok(resolved.clone());
        }

        self.stack.push(path.clone());
        let result = self.resolve_value(&token.raw, path, UnresolvedPolicy::Fail);
        self.stack.pop();

        self.memo.insert(path.clone(), result.clone());
        result
    }

    /// Resolves an arbitrary raw value on behalf of the token at `owner`.
    pub fn resolve_value(
        &mut self,
        raw: &Value,
        owner: &TokenPath,
        policy: UnresolvedPolicy,
    ) -> Result<Value, ReferenceError> {
        match raw {
            Value::String(s) => self.resolve_string(s, owner, policy),
            Value::Array(items) => items
                .iter()
                .map(|item| self.resolve_value(item, owner, policy))
                .collect::<Result<Vec<_>, _>>()
                .map(Value::Array),
            Value::Object(entries) => {
                let mut out = Map::with_capacity(entries.len());
                for (key, item) in entries {
                    out.insert(key.clone(), self.resolve_value(item, owner, policy)?);
                }
                Ok(Value::Object(out))
            }
            other => Ok(other.clone()),
        }
    }

    /// References that were replaced by `var(--...)` so far, as (owner, reference) pairs.
    pub fn fallbacks(&self) -> &[(TokenPath, TokenPath)] {
        &self.fallbacks
    }

    pub fn take_fallbacks(&mut self) -> Vec<(TokenPath, TokenPath)> {
        std::mem::take(&mut self.fallbacks)
    }

    fn resolve_string(
        &mut self,
        s: &str,
        owner: &TokenPath,
        policy: UnresolvedPolicy,
    ) -> Result<Value, ReferenceError> {
        let template = parse_value_template(s)?;
        if !template.has_references() {
            return Ok(Value::String(s.to_string()));
        }
        if let Some(target) = template.as_single_reference() {
            return self.follow(target, owner, policy);
        }

        let mut out = String::with_capacity(s.len());
        for fragment in &template.fragments {
            match fragment {
                Fragment::Literal(text) => out.push_str(text),
                Fragment::Reference(target) => {
                    let value = self.follow(target, owner, policy)?;
                    match scalar_text(&value) {
                        Some(text) => out.push_str(&text),
                        None => {
                            return Err(ReferenceError::CompositeInString {
                                token: owner.dotted(),
                                reference: target.dotted(),
                            });
                        }
                    }
                }
            }
        }
        Ok(Value::String(out))
    }

    fn follow(
        &mut self,
        reference: &TokenPath,
        owner: &TokenPath,
        policy: UnresolvedPolicy,
    ) -> Result<Value, ReferenceError> {
        let result = match self.locate(reference) {
            Some(target) => self.resolve_token(&target),
            None => Err(self.unresolved(reference, owner)),
        };
        match (result, policy) {
            (Err(e), UnresolvedPolicy::CssVariable) if e.is_unresolved() => {
                log::debug!("'{}' falls back to var(--{})", owner, reference.dashed());
                self.fallbacks.push((owner.clone(), reference.clone()));
                Ok(Value::String(format!("var(--{})", reference.dashed())))
            }
            (result, _) => result,
        }
    }

    /// Maps a reference to a token path in the tree. A trailing `.value`
    /// segment is accepted and ignored.
    fn locate(&self, reference: &TokenPath) -> Option<TokenPath> {
        if self.tree.get(reference).is_some() {
            return Some(reference.clone());
        }
        if reference.last() == Some("value") {
            let parent = reference.parent()?;
            if self.tree.get(&parent).is_some() {
                return Some(parent);
            }
        }
        None
    }

    fn unresolved(&self, reference: &TokenPath, owner: &TokenPath) -> ReferenceError {
        let origin = self
            .tree
            .get(owner)
            .map(|t| t.origin_label().to_string())
            .unwrap_or_else(|| "<none>".to_string());
        ReferenceError::UnresolvedTokenReference {
            token: owner.dotted(),
            reference: reference.dotted(),
            origin,
        }
    }
}

/// Renders a resolved scalar for splicing into a larger string.
fn scalar_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Null => Some(String::new()),
        Value::Array(_) | Value::Object(_) => None,
    }
}

/// A token tree after reference resolution, with the per-token failures.
///
/// Tokens that failed keep `resolved == None`; emitters decide whether a
/// failure is fatal for their output.
#[derive(Debug, Clone, Default)]
pub struct ResolvedTree {
    tree: TokenTree,
    failures: IndexMap<TokenPath, ReferenceError>,
}

impl ResolvedTree {
    /// Resolves every token in `tree`.
    pub fn resolve(mut tree: TokenTree) -> Self {
        let results: Vec<(TokenPath, Result<Value, ReferenceError>)> = {
            let mut resolver = Resolver::new(&tree);
            tree.tokens()
                .into_iter()
                .map(|token| (token.path.clone(), resolver.resolve_token(&token.path)))
                .collect()
        };

        let mut resolved = HashMap::with_capacity(results.len());
        let mut failures = IndexMap::new();
        for (path, result) in results {
            match result {
                Ok(value) => {
                    resolved.insert(path, value);
                }
                Err(e) => {
                    log::debug!("Token '{}' did not resolve: {}", path, e);
                    failures.insert(path, e);
                }
            }
        }
        tree.for_each_token_mut(|token| {
            token.resolved = resolved.remove(&token.path);
        });

        Self { tree, failures }
    }

    pub fn tree(&self) -> &TokenTree {
        &self.tree
    }

    pub fn into_tree(self) -> TokenTree {
        self.tree
    }

    pub fn failure(&self, path: &TokenPath) -> Option<&ReferenceError> {
        self.failures.get(path)
    }

    pub fn failures(&self) -> impl Iterator<Item = (&TokenPath, &ReferenceError)> {
        self.failures.iter()
    }

    pub fn is_complete(&self) -> bool {
        self.failures.is_empty()
    }

    /// A fresh resolver over this tree, for lenient re-resolution of raw values.
    pub fn resolver(&self) -> Resolver<'_> {
        Resolver::new(&self.tree)
    }
}
