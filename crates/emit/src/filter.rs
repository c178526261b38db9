use swatch_types::{Token, TokenTree};

/// A path-prefix predicate selecting the tokens one emitter sees.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TokenFilter {
    prefixes: Vec<Vec<String>>,
    excluded: Vec<Vec<String>>,
}

impl TokenFilter {
    /// Tokens under any of the given top-level namespaces.
    pub fn domains(roots: &[&str]) -> Self {
        Self {
            prefixes: roots.iter().map(|r| vec![r.to_string()]).collect(),
            excluded: Vec::new(),
        }
    }

    /// Tokens under one dotted prefix, e.g. `font.face`.
    pub fn prefix(dotted: &str) -> Self {
        Self {
            prefixes: vec![dotted.split('.').map(str::to_string).collect()],
            excluded: Vec::new(),
        }
    }

    /// Drops tokens under a dotted prefix even when an included prefix matches.
    pub fn excluding(mut self, dotted: &str) -> Self {
        self.excluded.push(dotted.split('.').map(str::to_string).collect());
        self
    }

    pub fn matches(&self, token: &Token) -> bool {
        let under = |prefix: &Vec<String>| {
            let prefix: Vec<&str> = prefix.iter().map(String::as_str).collect();
            token.path.starts_with(&prefix)
        };
        self.prefixes.iter().any(under) && !self.excluded.iter().any(under)
    }

    pub fn select(&self, tree: &TokenTree) -> TokenTree {
        tree.filter(|token| self.matches(token))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_prefix_and_exclusion() {
        let tree = TokenTree::from_json(
            &json!({
                "font": {
                    "family": { "body": { "value": "Inter" } },
                    "face": { "inter": { "value": { "fontFamily": "Inter", "src": "inter.woff2" } } }
                },
                "spacing": { "sm": { "value": "4px" } }
            }),
            None,
        )
        .unwrap();

        assert_eq!(TokenFilter::prefix("font.face").select(&tree).len(), 1);
        assert_eq!(TokenFilter::domains(&["font", "spacing"]).select(&tree).len(), 3);
        let families = TokenFilter::domains(&["font"]).excluding("font.face");
        assert_eq!(families.select(&tree).len(), 1);
    }
}
