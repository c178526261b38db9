use crate::artifact::{Artifact, CommentStyle};
use crate::emitter::Emit;
use crate::error::EmitError;
use crate::filter::TokenFilter;
use crate::format::{js_key, js_string};
use indexmap::IndexMap;
use serde_json::Value;
use std::fmt::Write;
use swatch_reference::ResolvedTree;
use swatch_transform::{NameTransform, PALETTE_LENGTH, is_shade_key, order_shades, pad_palette_array};
use swatch_types::{Diagnostic, Token};

/// Fixed-length color arrays for the component-theming library.
///
/// Tokens whose last segment is a numeric shade, at least two segments
/// below the namespace, are gathered into a palette per parent path. Every
/// other token is a semantic color and becomes its own array.
#[derive(Debug, Clone)]
pub struct BrandPaletteEmitter {
    pub path: String,
    pub filter: TokenFilter,
    pub length: usize,
}

impl BrandPaletteEmitter {
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            filter: TokenFilter::domains(&["color"]),
            length: PALETTE_LENGTH,
        }
    }
}

enum Entry {
    Palette(Vec<(u32, Value)>),
    Semantic(Vec<Value>),
}

fn palette_shade(token: &Token) -> Option<u32> {
    let last = token.path.last()?;
    if token.path.len() >= 3 && is_shade_key(last) {
        last.parse().ok()
    } else {
        None
    }
}

const ENTRY_NAME: [NameTransform; 2] = [NameTransform::DedupeDoubledSegment, NameTransform::KebabToCamel];

fn entry_name(segments: &[String]) -> String {
    NameTransform::apply_all(&ENTRY_NAME, &segments.join("-"))
}

impl BrandPaletteEmitter {
    fn collect(&self, resolved: &ResolvedTree, diagnostics: &mut Vec<Diagnostic>) -> Result<IndexMap<String, Entry>, EmitError> {
        let subset = self.filter.select(resolved.tree());
        let mut entries: IndexMap<String, Entry> = IndexMap::new();

        for token in subset.tokens() {
            if let Some(err) = resolved.failure(&token.path) {
                return Err(EmitError::Reference(err.clone()));
            }
            let value = token.value().clone();
            match palette_shade(token) {
                Some(shade) => {
                    let segments = token.path.skip(1);
                    let name = entry_name(&segments[..segments.len() - 1]);
                    match entries.entry(name).or_insert_with(|| Entry::Palette(Vec::new())) {
                        Entry::Palette(shades) => shades.push((shade, value)),
                        Entry::Semantic(_) => return Err(name_clash(token)),
                    }
                }
                None => {
                    let name = entry_name(token.path.skip(1));
                    let values = match value {
                        Value::Array(items) => items,
                        scalar => {
                            let diagnostic = Diagnostic::ScalarWrapped {
                                token: token.path.dotted(),
                            };
                            log::warn!("{}", diagnostic);
                            diagnostics.push(diagnostic);
                            vec![scalar]
                        }
                    };
                    if entries.insert(name, Entry::Semantic(values)).is_some() {
                        return Err(name_clash(token));
                    }
                }
            }
        }
        Ok(entries)
    }
}

fn name_clash(token: &Token) -> EmitError {
    EmitError::UnsupportedValue {
        token: token.path.dotted(),
        message: "its palette name is already used by another color".to_string(),
    }
}

impl Emit for BrandPaletteEmitter {
    fn output_path(&self) -> &str {
        &self.path
    }

    fn emit(&self, resolved: &ResolvedTree) -> Result<Artifact, EmitError> {
        let mut diagnostics = Vec::new();
        let entries = self.collect(resolved, &mut diagnostics)?;

        let mut out = CommentStyle::Script.header();
        out.push_str("import type { MantineColorsTuple } from '@mantine/core';\n\n");
        out.push_str("export const colors = {\n");
        for (name, entry) in entries {
            let values = match entry {
                Entry::Palette(shades) => order_shades(shades).into_iter().map(|(_, v)| v).collect::<Vec<_>>(),
                Entry::Semantic(values) => values,
            };
            let (values, diagnostic) = pad_palette_array(&name, values, self.length);
            if let Some(diagnostic) = diagnostic {
                log::warn!("{}", diagnostic);
                diagnostics.push(diagnostic);
            }
            let items = values
                .iter()
                .map(|v| match v {
                    Value::String(s) => js_string(s),
                    other => other.to_string(),
                })
                .collect::<Vec<_>>()
                .join(", ");
            writeln!(out, "  {}: [{}],", js_key(&name), items)?;
        }
        out.push_str("} as unknown as Record<string, MantineColorsTuple>;\n\nexport default colors;\n");

        Ok(Artifact::new(self.path.clone(), out).with_diagnostics(diagnostics))
    }
}
