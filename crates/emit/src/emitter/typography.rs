use crate::artifact::{Artifact, CommentStyle};
use crate::emitter::Emit;
use crate::error::EmitError;
use crate::filter::TokenFilter;
use crate::format::scalar_text;
use crate::media::{Breakpoint, MediaQueries};
use indexmap::IndexMap;
use serde_json::{Map, Value};
use std::fmt::Write;
use swatch_reference::{ResolvedTree, UnresolvedPolicy};
use swatch_transform::{TransformChain, camel_to_kebab, dedupe_doubled_segment};
use swatch_types::{Diagnostic, Token};

/// CSS utility classes built from composite typography tokens.
///
/// Responsive variants of one token share a single class name; only the
/// enclosing media query differs. Unresolved references fall back to
/// `var(--dashed-path)`, since the CSS variables are assumed to be loaded.
#[derive(Debug, Clone)]
pub struct TypographyClassEmitter {
    pub path: String,
    pub filter: TokenFilter,
    pub chain: TransformChain,
}

impl TypographyClassEmitter {
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            filter: TokenFilter::domains(&["typography"]),
            chain: TransformChain::for_typography_css(),
        }
    }
}

/// One (class, breakpoint, property, value) fact.
#[derive(Debug, Clone, PartialEq)]
struct Declaration {
    class: String,
    breakpoint: Option<Breakpoint>,
    property: String,
    value: String,
}

/// The class name for a typography token: the path below the namespace.
pub fn class_name(token: &Token) -> String {
    dedupe_doubled_segment(&token.path.skip(1).join("-"))
}

impl TypographyClassEmitter {
    fn composite_value(
        &self,
        resolved: &ResolvedTree,
        token: &Token,
        diagnostics: &mut Vec<Diagnostic>,
    ) -> Result<Value, EmitError> {
        if let Some(value) = &token.resolved {
            return Ok(value.clone());
        }
        let mut resolver = resolved.resolver();
        let value = resolver.resolve_value(&token.raw, &token.path, UnresolvedPolicy::CssVariable)?;
        for (owner, reference) in resolver.take_fallbacks() {
            let diagnostic = Diagnostic::ReferenceFallback {
                token: owner.dotted(),
                reference: reference.dotted(),
            };
            log::warn!("{}", diagnostic);
            diagnostics.push(diagnostic);
        }
        Ok(value)
    }

    fn flatten(&self, token: &Token, value: &Value, out: &mut Vec<Declaration>) -> Result<(), EmitError> {
        let Value::Object(entries) = value else {
            return Err(EmitError::UnsupportedValue {
                token: token.path.dotted(),
                message: "typography tokens must be objects of CSS properties".to_string(),
            });
        };
        let class = class_name(token);
        for (key, entry) in entries {
            match (Breakpoint::from_key(key), entry) {
                (Some(breakpoint), Value::Object(properties)) => {
                    self.push_properties(token, &class, Some(breakpoint), properties, out)?;
                }
                (Some(_), _) => {
                    return Err(EmitError::UnsupportedValue {
                        token: token.path.dotted(),
                        message: format!("breakpoint '{}' must hold an object of properties", key),
                    });
                }
                (None, _) => {
                    let single = Map::from_iter([(key.clone(), entry.clone())]);
                    self.push_properties(token, &class, None, &single, out)?;
                }
            }
        }
        Ok(())
    }

    fn push_properties(
        &self,
        token: &Token,
        class: &str,
        breakpoint: Option<Breakpoint>,
        properties: &Map<String, Value>,
        out: &mut Vec<Declaration>,
    ) -> Result<(), EmitError> {
        for (property, value) in properties {
            let value = scalar_text(&self.chain.apply(value)).ok_or_else(|| EmitError::UnsupportedValue {
                token: token.path.dotted(),
                message: format!("property '{}' is not a scalar", property),
            })?;
            out.push(Declaration {
                class: class.to_string(),
                breakpoint,
                property: camel_to_kebab(property),
                value,
            });
        }
        Ok(())
    }
}

impl Emit for TypographyClassEmitter {
    fn output_path(&self) -> &str {
        &self.path
    }

    fn emit(&self, resolved: &ResolvedTree) -> Result<Artifact, EmitError> {
        let subset = self.filter.select(resolved.tree());
        let queries = MediaQueries::from_tree(resolved.tree());
        let mut diagnostics = Vec::new();
        let mut declarations = Vec::new();

        for token in subset.tokens() {
            if let Some(err) = resolved.failure(&token.path) {
                if !err.is_unresolved() {
                    return Err(EmitError::Reference(err.clone()));
                }
            }
            let value = self.composite_value(resolved, token, &mut diagnostics)?;
            self.flatten(token, &value, &mut declarations)?;
        }

        let mut rules: IndexMap<(Option<Breakpoint>, String), Vec<(String, String)>> = IndexMap::new();
        for decl in declarations {
            rules
                .entry((decl.breakpoint, decl.class))
                .or_default()
                .push((decl.property, decl.value));
        }

        let mut out = CommentStyle::Css.header();
        for ((_, class), properties) in rules.iter().filter(|((bp, _), _)| bp.is_none()) {
            out.push('\n');
            write_rule(&mut out, class, properties, "")?;
        }
        for breakpoint in Breakpoint::ORDER {
            let group: Vec<_> = rules
                .iter()
                .filter(|((bp, _), _)| *bp == Some(breakpoint))
                .collect();
            if group.is_empty() {
                continue;
            }
            writeln!(out, "\n@media {} {{", queries.query(breakpoint))?;
            for (i, ((_, class), properties)) in group.into_iter().enumerate() {
                if i > 0 {
                    out.push('\n');
                }
                write_rule(&mut out, class, properties, "  ")?;
            }
            writeln!(out, "}}")?;
        }

        Ok(Artifact::new(self.path.clone(), out).with_diagnostics(diagnostics))
    }
}

fn write_rule(out: &mut String, class: &str, properties: &[(String, String)], indent: &str) -> std::fmt::Result {
    writeln!(out, "{}.{} {{", indent, class)?;
    for (property, value) in properties {
        writeln!(out, "{}  {}: {};", indent, property, value)?;
    }
    writeln!(out, "{}}}", indent)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use swatch_types::TokenTree;

    fn emit(json: Value) -> Artifact {
        let resolved = ResolvedTree::resolve(TokenTree::from_json(&json, Some("typography/editorial/a.json")).unwrap());
        TypographyClassEmitter::new("web/a/typography.css").emit(&resolved).unwrap()
    }

    #[test]
    fn test_plain_rule_with_rem_conversion() {
        let artifact = emit(json!({
            "font": { "family": { "body": { "value": "Inter, sans-serif" } } },
            "typography": {
                "body": {
                    "value": {
                        "fontFamily": "{font.family.body}",
                        "fontSize": "16px",
                        "lineHeight": "24px",
                        "fontWeight": 400
                    }
                }
            }
        }));
        assert!(artifact.contents.contains(
            ".body {\n  font-family: Inter, sans-serif;\n  font-size: 1rem;\n  line-height: 1.5rem;\n  font-weight: 400;\n}\n"
        ));
        assert!(artifact.diagnostics.is_empty());
    }

    #[test]
    fn test_mobile_only_token_emits_one_wrapped_rule() {
        let artifact = emit(json!({
            "typography": { "heading": { "h1": { "value": { "mobile": { "fontSize": "28px" } } } } }
        }));
        let body = &artifact.contents;
        assert_eq!(body.matches(".heading-h1 {").count(), 1);
        assert!(body.contains("@media (max-width: 767px) {\n  .heading-h1 {\n    font-size: 1.75rem;\n  }\n}\n"));
    }

    #[test]
    fn test_breakpoints_share_class_and_follow_fixed_order() {
        let artifact = emit(json!({
            "breakpoint": { "tablet": { "value": "640px" }, "desktop": { "value": "1280px" } },
            "typography": {
                "display": {
                    "value": {
                        "desktop": { "fontSize": "48px" },
                        "fontWeight": 700,
                        "mobile": { "fontSize": "32px" }
                    }
                }
            }
        }));
        let body = &artifact.contents;
        let plain = body.find(".display {\n  font-weight: 700;").unwrap();
        let mobile = body.find("@media (max-width: 639px)").unwrap();
        let desktop = body.find("@media (min-width: 1280px)").unwrap();
        assert!(plain < mobile && mobile < desktop);
        assert!(!body.contains("display-mobile"));
        assert!(!body.contains("display-desktop"));
        assert!(!body.contains("@media (min-width: 640px)"));
    }

    #[test]
    fn test_unresolved_reference_falls_back_to_variable() {
        let artifact = emit(json!({
            "typography": { "caption": { "value": { "fontFamily": "{font.family.caption}", "fontSize": "12px" } } }
        }));
        assert!(artifact.contents.contains("  font-family: var(--font-family-caption);\n"));
        assert_eq!(
            artifact.diagnostics,
            vec![Diagnostic::ReferenceFallback {
                token: "typography.caption".to_string(),
                reference: "font.family.caption".to_string(),
            }]
        );
    }

    #[test]
    fn test_cycles_are_not_tolerated() {
        let json = json!({
            "font": { "a": { "value": "{font.b}" }, "b": { "value": "{font.a}" } },
            "typography": { "body": { "value": { "fontFamily": "{font.a}" } } }
        });
        let resolved = ResolvedTree::resolve(TokenTree::from_json(&json, None).unwrap());
        let err = TypographyClassEmitter::new("t.css").emit(&resolved).unwrap_err();
        assert!(err.to_string().contains("Cyclic"));
    }
}
