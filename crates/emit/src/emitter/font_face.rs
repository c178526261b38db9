use crate::artifact::{Artifact, CommentStyle};
use crate::emitter::Emit;
use crate::error::EmitError;
use crate::filter::TokenFilter;
use crate::format::{js_string, scalar_text};
use serde_json::{Map, Value};
use std::fmt::Write;
use swatch_reference::ResolvedTree;
use swatch_transform::camel_to_kebab;
use swatch_types::Token;

/// `@font-face` declarations from `font.face.*` tokens.
#[derive(Debug, Clone)]
pub struct FontFaceEmitter {
    pub path: String,
    pub filter: TokenFilter,
}

impl FontFaceEmitter {
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            filter: TokenFilter::prefix("font.face"),
        }
    }
}

/// The CSS `format()` hint for a font file, by extension.
pub fn font_format(url: &str) -> Option<&'static str> {
    let file = url.split(['?', '#']).next().unwrap_or(url);
    let extension = file.rsplit_once('.')?.1.to_ascii_lowercase();
    match extension.as_str() {
        "woff2" => Some("woff2"),
        "woff" => Some("woff"),
        "ttf" => Some("truetype"),
        "otf" => Some("opentype"),
        _ => None,
    }
}

fn source_list(token: &Token, src: &Value) -> Result<String, EmitError> {
    let urls: Vec<&str> = match src {
        Value::String(s) => vec![s.as_str()],
        Value::Array(items) => items.iter().filter_map(Value::as_str).collect(),
        _ => Vec::new(),
    };
    if urls.is_empty() {
        return Err(EmitError::UnsupportedValue {
            token: token.path.dotted(),
            message: "'src' must be a URL or a list of URLs".to_string(),
        });
    }
    Ok(urls
        .into_iter()
        .map(|url| match font_format(url) {
            Some(format) => format!("url({}) format(\"{}\")", js_string(url), format),
            None => format!("url({})", js_string(url)),
        })
        .collect::<Vec<_>>()
        .join(", "))
}

fn family(token: &Token, face: &Map<String, Value>) -> Result<String, EmitError> {
    let name = face
        .get("fontFamily")
        .and_then(Value::as_str)
        .ok_or_else(|| EmitError::UnsupportedValue {
            token: token.path.dotted(),
            message: "missing 'fontFamily'".to_string(),
        })?;
    let quoted = name.starts_with('"') || name.starts_with('\'');
    Ok(if quoted { name.to_string() } else { js_string(name) })
}

impl Emit for FontFaceEmitter {
    fn output_path(&self) -> &str {
        &self.path
    }

    fn emit(&self, resolved: &ResolvedTree) -> Result<Artifact, EmitError> {
        let subset = self.filter.select(resolved.tree());
        let mut out = CommentStyle::Css.header();

        for token in subset.tokens() {
            if let Some(err) = resolved.failure(&token.path) {
                return Err(EmitError::Reference(err.clone()));
            }
            let Value::Object(face) = token.value() else {
                return Err(EmitError::UnsupportedValue {
                    token: token.path.dotted(),
                    message: "a font face must be an object".to_string(),
                });
            };
            let src = face.get("src").ok_or_else(|| EmitError::UnsupportedValue {
                token: token.path.dotted(),
                message: "missing 'src'".to_string(),
            })?;

            writeln!(out, "\n@font-face {{")?;
            writeln!(out, "  font-family: {};", family(token, face)?)?;
            writeln!(out, "  src: {};", source_list(token, src)?)?;
            for (key, value) in face {
                if key == "fontFamily" || key == "src" {
                    continue;
                }
                if let Some(text) = scalar_text(value) {
                    writeln!(out, "  {}: {};", camel_to_kebab(key), text)?;
                }
            }
            writeln!(out, "}}")?;
        }

        Ok(Artifact::new(self.path.clone(), out))
    }
}
