//! Composable, order-sensitive value transforms selected per emitter.
use crate::dimension::{DEFAULT_REM_BASE, px_to_number, px_to_rem};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq)]
#[serde(rename_all = "camelCase", tag = "kind")]
pub enum ValueTransform {
    /// `"18px"` to `18`, for code consumers.
    PxToNumber,
    /// `"18px"` to `"1.125rem"`, for CSS typography classes.
    PxToRem { base: f64 },
}

impl ValueTransform {
    /// Applies the transform to a scalar, or to every scalar inside a
    /// composite value.
    pub fn apply(&self, value: &Value) -> Value {
        match value {
            Value::Array(items) => Value::Array(items.iter().map(|v| self.apply(v)).collect()),
            Value::Object(entries) => Value::Object(
                entries
                    .iter()
                    .map(|(k, v)| (k.clone(), self.apply(v)))
                    .collect::<Map<String, Value>>(),
            ),
            scalar => self.apply_scalar(scalar),
        }
    }

    fn apply_scalar(&self, value: &Value) -> Value {
        match self {
            ValueTransform::PxToNumber => px_to_number(value),
            ValueTransform::PxToRem { base } => match value {
                Value::String(s) => px_to_rem(s, *base)
                    .map(Value::String)
                    .unwrap_or_else(|| value.clone()),
                other => other.clone(),
            },
        }
    }
}

/// An ordered list of value transforms.
#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq)]
pub struct TransformChain {
    steps: Vec<ValueTransform>,
}

impl TransformChain {
    pub fn new() -> Self {
        Self::default()
    }

    /// The chain for JS/TS data modules.
    pub fn for_code() -> Self {
        Self::new().then(ValueTransform::PxToNumber)
    }

    /// The chain for CSS typography utility classes.
    pub fn for_typography_css() -> Self {
        Self::new().then(ValueTransform::PxToRem {
            base: DEFAULT_REM_BASE,
        })
    }

    pub fn then(mut self, step: ValueTransform) -> Self {
        self.steps.push(step);
        self
    }

    pub fn steps(&self) -> &[ValueTransform] {
        &self.steps
    }

    pub fn apply(&self, value: &Value) -> Value {
        self.steps
            .iter()
            .fold(value.clone(), |acc, step| step.apply(&acc))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_code_chain_reaches_into_composites() {
        let value = json!({ "fontSize": "18px", "lineHeight": "24px", "fontWeight": 700, "fontFamily": "Inter" });
        assert_eq!(
            TransformChain::for_code().apply(&value),
            json!({ "fontSize": 18, "lineHeight": 24, "fontWeight": 700, "fontFamily": "Inter" })
        );
    }

    #[test]
    fn test_chain_order_matters() {
        let rem_first = TransformChain::for_typography_css().then(ValueTransform::PxToNumber);
        let number_first = TransformChain::for_code().then(ValueTransform::PxToRem { base: 16.0 });
        assert_eq!(rem_first.apply(&json!("24px")), json!("1.5rem"));
        assert_eq!(number_first.apply(&json!("24px")), json!(24));
    }

    #[test]
    fn test_empty_chain_is_identity() {
        let value = json!(["4px", { "a": "b" }]);
        assert_eq!(TransformChain::new().apply(&value), value);
    }
}
