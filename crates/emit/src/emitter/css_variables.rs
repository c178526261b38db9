use crate::artifact::{Artifact, CommentStyle};
use crate::emitter::Emit;
use crate::error::EmitError;
use crate::filter::TokenFilter;
use crate::format::scalar_text;
use indexmap::IndexSet;
use std::fmt::Write;
use swatch_reference::ResolvedTree;
use swatch_transform::dedupe_doubled_segment;
use swatch_types::{Diagnostic, Token};

/// Flat `--token-name: value;` declarations inside `:root`, optionally
/// repeated inside a Tailwind `@theme` block.
///
/// CSS variables are the root of the reference graph, so any token in the
/// subset that failed to resolve fails the whole artifact.
#[derive(Debug, Clone)]
pub struct CssVariableEmitter {
    pub path: String,
    pub filter: TokenFilter,
    pub tailwind_theme: bool,
    pub descriptions: bool,
}

impl CssVariableEmitter {
    pub fn new(path: impl Into<String>, filter: TokenFilter) -> Self {
        Self {
            path: path.into(),
            filter,
            tailwind_theme: false,
            descriptions: true,
        }
    }

    pub fn with_tailwind_theme(mut self, enabled: bool) -> Self {
        self.tailwind_theme = enabled;
        self
    }

    pub fn with_descriptions(mut self, enabled: bool) -> Self {
        self.descriptions = enabled;
        self
    }
}

struct Declaration<'a> {
    token: &'a Token,
    name: String,
    value: String,
}

/// The custom property name for a token path.
pub fn variable_name(token: &Token) -> String {
    dedupe_doubled_segment(&format!("--{}", token.path.dashed()))
}

impl Emit for CssVariableEmitter {
    fn output_path(&self) -> &str {
        &self.path
    }

    fn emit(&self, resolved: &ResolvedTree) -> Result<Artifact, EmitError> {
        let subset = self.filter.select(resolved.tree());
        let mut diagnostics = Vec::new();
        let mut declarations = Vec::new();

        for token in subset.tokens() {
            if let Some(err) = resolved.failure(&token.path) {
                return Err(EmitError::Reference(err.clone()));
            }
            let Some(value) = scalar_text(token.value()) else {
                let diagnostic = Diagnostic::ValueSkipped {
                    token: token.path.dotted(),
                    reason: "composite values have no CSS variable form".to_string(),
                };
                log::warn!("{}", diagnostic);
                diagnostics.push(diagnostic);
                continue;
            };
            declarations.push(Declaration {
                token,
                name: variable_name(token),
                value,
            });
        }

        let mut out = CommentStyle::Css.header();
        out.push('\n');
        self.write_block(&mut out, ":root", &declarations, &[])?;

        if self.tailwind_theme {
            let namespaces: IndexSet<String> = declarations
                .iter()
                .filter_map(|d| d.name.trim_start_matches('-').split('-').next())
                .map(str::to_string)
                .collect();
            let resets: Vec<String> = namespaces
                .iter()
                .map(|ns| format!("--{}-*: initial;", ns))
                .collect();
            out.push('\n');
            self.write_block(&mut out, "@theme", &declarations, &resets)?;
        }

        Ok(Artifact::new(self.path.clone(), out).with_diagnostics(diagnostics))
    }
}

impl CssVariableEmitter {
    fn write_block(
        &self,
        out: &mut String,
        selector: &str,
        declarations: &[Declaration<'_>],
        preamble: &[String],
    ) -> std::fmt::Result {
        writeln!(out, "{} {{", selector)?;
        for line in preamble {
            writeln!(out, "  {}", line)?;
        }
        for decl in declarations {
            if self.descriptions {
                if let Some(description) = &decl.token.metadata.description {
                    writeln!(out, "  /* {} */", description.replace("*/", "* /"))?;
                }
            }
            writeln!(out, "  {}: {};", decl.name, decl.value)?;
        }
        writeln!(out, "}}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{Value, json};
    use swatch_reference::ReferenceError;
    use swatch_types::TokenTree;

    fn resolve(json: Value) -> ResolvedTree {
        ResolvedTree::resolve(TokenTree::from_json(&json, Some("test.json")).unwrap())
    }

    fn colors() -> CssVariableEmitter {
        CssVariableEmitter::new("web/a/variables-light.css", TokenFilter::domains(&["color"]))
    }

    #[test]
    fn test_references_are_fully_substituted() {
        let resolved = resolve(json!({
            "color": {
                "base": { "white": { "value": "#ffffff" } },
                "text": { "inverse": { "value": "{color.base.white}", "description": "Text on dark surfaces" } },
                "gradient": { "value": "linear-gradient(to right, {color.base.white}, {color.text.inverse})" }
            }
        }));
        let artifact = colors().emit(&resolved).unwrap();
        let body = &artifact.contents;
        assert!(body.starts_with("/* Generated by swatch"));
        assert!(body.contains("  --color-base-white: #ffffff;\n"));
        assert!(body.contains("  /* Text on dark surfaces */\n  --color-text-inverse: #ffffff;\n"));
        assert!(body.contains("--color-gradient: linear-gradient(to right, #ffffff, #ffffff);"));
        assert!(!body.contains("{color"));
    }

    #[test]
    fn test_doubled_namespace_collapses() {
        let resolved = resolve(json!({
            "color": { "color": { "icon": { "primary": { "value": "#123456" } } } }
        }));
        let artifact = colors().emit(&resolved).unwrap();
        assert!(artifact.contents.contains("  --color-icon-primary: #123456;"));
        assert!(!artifact.contents.contains("--color-color"));
    }

    #[test]
    fn test_unresolved_reference_fails_fast() {
        let resolved = resolve(json!({ "color": { "text": { "value": "{color.missing}" } } }));
        let err = colors().emit(&resolved).unwrap_err();
        match err {
            EmitError::Reference(ReferenceError::UnresolvedTokenReference { token, reference, origin }) => {
                assert_eq!(token, "color.text");
                assert_eq!(reference, "color.missing");
                assert_eq!(origin, "test.json");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_failures_outside_the_subset_are_ignored() {
        let resolved = resolve(json!({
            "color": { "bg": { "value": "#fff" } },
            "typography": { "body": { "value": { "fontFamily": "{font.missing}" } } }
        }));
        assert!(colors().emit(&resolved).is_ok());
    }

    #[test]
    fn test_tailwind_theme_block_with_resets() {
        let resolved = resolve(json!({
            "color": { "bg": { "value": "#fff" } },
            "spacing": { "sm": { "value": "4px" }, "md": { "value": "8px" } }
        }));
        let emitter = CssVariableEmitter::new("web/a/theme-light.css", TokenFilter::domains(&["color", "spacing"]))
            .with_tailwind_theme(true);
        let body = emitter.emit(&resolved).unwrap().contents;
        let theme = body.split("@theme {").nth(1).unwrap();
        assert!(body.contains(":root {\n  --color-bg: #fff;\n"));
        assert!(theme.starts_with("\n  --color-*: initial;\n  --spacing-*: initial;\n  --color-bg: #fff;\n"));
        assert_eq!(body.matches("--spacing-md: 8px;").count(), 2);
    }

    #[test]
    fn test_composite_values_are_skipped_with_diagnostic() {
        let resolved = resolve(json!({ "color": { "ramp": { "value": ["#000", "#111"] } } }));
        let artifact = colors().emit(&resolved).unwrap();
        assert!(!artifact.contents.contains("--color-ramp"));
        assert!(matches!(artifact.diagnostics[0], Diagnostic::ValueSkipped { .. }));
    }

    #[test]
    fn test_output_is_stable_across_runs() {
        let json = json!({ "color": { "z": { "value": "#000" }, "a": { "value": "{color.z}" } } });
        let first = colors().emit(&resolve(json.clone())).unwrap();
        let second = colors().emit(&resolve(json)).unwrap();
        assert_eq!(first.contents, second.contents);
        let z = first.contents.find("--color-z").unwrap();
        let a = first.contents.find("--color-a").unwrap();
        assert!(z < a, "authoring order is kept");
    }
}
