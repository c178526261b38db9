use crate::error::SourceError;
use crate::plan::SourcePlan;
use crate::provider::SourceProvider;
use serde_json::Value;
use swatch_types::TokenTree;

/// Parses one source file into a token tree.
pub fn load_file(provider: &dyn SourceProvider, path: &str) -> Result<TokenTree, SourceError> {
    let bytes = provider.read(path)?;
    let json: Value = serde_json::from_slice(&bytes).map_err(|e| SourceError::Json {
        path: path.to_string(),
        message: e.to_string(),
    })?;
    Ok(TokenTree::from_json(&json, Some(path))?)
}

/// Parses every planned file and deep-merges them in plan order.
pub fn load_tree(provider: &dyn SourceProvider, plan: &SourcePlan) -> Result<TokenTree, SourceError> {
    let mut tree = TokenTree::new();
    for file in &plan.files {
        let layer = load_file(provider, &file.path)?;
        log::debug!("[{}] merging {} tokens from '{}'", plan.key, layer.len(), file.path);
        tree.merge(layer)?;
    }
    Ok(tree)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::plan::resolve_sources;
    use crate::provider::InMemorySource;
    use swatch_types::{Brand, BuildKey, Mode, TokenPath, TreeError};

    #[test]
    fn test_layers_merge_in_order() {
        let provider = InMemorySource::new()
            .with_file(
                "color/global.json",
                r##"{"color":{"base":{"white":{"value":"#fff"}},"text":{"primary":{"value":"#000"}}}}"##,
            )
            .unwrap()
            .with_file(
                "color/brand-a-dark.json",
                r##"{"color":{"text":{"primary":{"value":"{color.base.white}"}}}}"##,
            )
            .unwrap()
            .with_file("spacing.json", r#"{"spacing":{"sm":{"value":"4px"}}}"#)
            .unwrap();

        let key = BuildKey::themed(Brand::A, Mode::Dark);
        let plan = resolve_sources(&provider, &key).unwrap();
        let tree = load_tree(&provider, &plan).unwrap();

        assert_eq!(tree.len(), 3);
        let primary = tree.get(&TokenPath::from("color.text.primary")).unwrap();
        assert_eq!(primary.raw, serde_json::json!("{color.base.white}"));
        assert_eq!(primary.origin_label(), "color/brand-a-dark.json");
    }

    #[test]
    fn test_invalid_json_names_the_file() {
        let provider = InMemorySource::new()
            .with_file("spacing.json", "{ not json")
            .unwrap();
        let err = load_file(&provider, "spacing.json").unwrap_err();
        assert!(matches!(&err, SourceError::Json { path, .. } if path == "spacing.json"));
    }

    #[test]
    fn test_shape_conflict_surfaces_as_tree_error() {
        let provider = InMemorySource::new()
            .with_file("color/global.json", r##"{"color":{"brand":{"value":"#f00"}}}"##)
            .unwrap()
            .with_file("color/brand-b.json", r##"{"color":{"brand":{"500":{"value":"#0f0"}}}}"##)
            .unwrap();
        let plan = resolve_sources(&provider, &BuildKey::themed(Brand::B, Mode::Light)).unwrap();
        let err = load_tree(&provider, &plan).unwrap_err();
        assert!(matches!(err, SourceError::Tree(TreeError::TokenShapeConflict { .. })));
    }
}
