use crate::artifact::{Artifact, CommentStyle};
use crate::emitter::Emit;
use crate::error::EmitError;
use crate::filter::TokenFilter;
use crate::format::js_literal;
use crate::media::Breakpoint;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use swatch_reference::ResolvedTree;
use swatch_transform::{TransformChain, kebab_to_camel};
use swatch_types::Token;

/// How leaf values are reshaped before serialization.
#[derive(Deserialize, Serialize, Debug, Clone, Copy, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum DataShape {
    /// The resolved value as-is.
    #[default]
    Plain,
    /// Responsive typography collapsed to one breakpoint: `mobile` if
    /// present, else the direct properties, else the first other breakpoint.
    /// Property names become camelCase.
    Typography,
}

#[derive(Deserialize, Serialize, Debug, Clone, Copy, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum ModuleFormat {
    #[default]
    Js,
    Ts,
}

/// Serializes the resolved subset as a default-exported data object for
/// code consumers such as the mobile runtime.
#[derive(Debug, Clone)]
pub struct PlatformDataEmitter {
    pub path: String,
    pub filter: TokenFilter,
    pub shape: DataShape,
    pub format: ModuleFormat,
    pub chain: TransformChain,
}

impl PlatformDataEmitter {
    pub fn new(path: impl Into<String>, filter: TokenFilter) -> Self {
        Self {
            path: path.into(),
            filter,
            shape: DataShape::Plain,
            format: ModuleFormat::Js,
            chain: TransformChain::for_code(),
        }
    }

    pub fn with_shape(mut self, shape: DataShape) -> Self {
        self.shape = shape;
        self
    }

    pub fn with_format(mut self, format: ModuleFormat) -> Self {
        self.format = format;
        self
    }

    fn leaf(&self, token: &Token) -> Option<Value> {
        let value = token.resolved.as_ref()?;
        let shaped = match self.shape {
            DataShape::Plain => value.clone(),
            DataShape::Typography => collapse_breakpoints(value),
        };
        Some(self.chain.apply(&shaped))
    }
}

/// Picks the single set of typography properties a device should use.
///
/// The `mobile` set, when present, is used on its own: direct properties
/// next to it (a shared `fontFamily`, say) are dropped, not merged in.
/// Otherwise the direct properties win, then the first breakpoint set.
pub fn collapse_breakpoints(value: &Value) -> Value {
    let Value::Object(entries) = value else {
        return value.clone();
    };
    let camel = |props: &Map<String, Value>| -> Value {
        Value::Object(
            props
                .iter()
                .map(|(k, v)| (kebab_to_camel(k), v.clone()))
                .collect(),
        )
    };

    if let Some(Value::Object(mobile)) = entries.get(Breakpoint::Mobile.key()) {
        return camel(mobile);
    }
    let direct: Map<String, Value> = entries
        .iter()
        .filter(|(k, _)| Breakpoint::from_key(k).is_none())
        .map(|(k, v)| (k.clone(), v.clone()))
        .collect();
    if !direct.is_empty() {
        return camel(&direct);
    }
    entries
        .values()
        .find_map(|v| v.as_object().map(camel))
        .unwrap_or_else(|| Value::Object(Map::new()))
}

impl Emit for PlatformDataEmitter {
    fn output_path(&self) -> &str {
        &self.path
    }

    fn emit(&self, resolved: &ResolvedTree) -> Result<Artifact, EmitError> {
        let subset = self.filter.select(resolved.tree());
        for token in subset.tokens() {
            if let Some(err) = resolved.failure(&token.path) {
                return Err(EmitError::Reference(err.clone()));
            }
        }
        let data = subset.to_value(|token| self.leaf(token));
        let literal = js_literal(&data)?;

        let mut out = CommentStyle::Script.header();
        out.push('\n');
        match self.format {
            ModuleFormat::Js => {
                out.push_str(&format!("export default {};\n", literal));
            }
            ModuleFormat::Ts => {
                out.push_str(&format!("const tokens = {} as const;\n\nexport default tokens;\n", literal));
            }
        }
        Ok(Artifact::new(self.path.clone(), out))
    }
}
