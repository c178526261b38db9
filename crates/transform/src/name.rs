//! Name transforms for generated variable names and object keys.

/// Collapses a doubled namespace segment in a generated name:
/// `--color-color-icon-primary` becomes `--color-icon-primary`.
///
/// Only consecutive, identical, non-numeric segments collapse, so scale
/// names such as `--space-2-2` are left alone.
pub fn dedupe_doubled_segment(name: &str) -> String {
    let body = name.trim_start_matches('-');
    let prefix = &name[..name.len() - body.len()];

    let mut kept: Vec<&str> = Vec::new();
    for segment in body.split('-') {
        let doubled = kept.last().is_some_and(|prev| {
            *prev == segment && !segment.is_empty() && !segment.chars().all(|c| c.is_ascii_digit())
        });
        if !doubled {
            kept.push(segment);
        }
    }
    format!("{}{}", prefix, kept.join("-"))
}

/// `font-size` becomes `fontSize`. Input without dashes is returned unchanged.
pub fn kebab_to_camel(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    let mut upper_next = false;
    for c in name.chars() {
        if c == '-' || c == '_' {
            upper_next = !out.is_empty();
        } else if upper_next {
            out.extend(c.to_uppercase());
            upper_next = false;
        } else {
            out.push(c);
        }
    }
    out
}

/// `fontSize` becomes `font-size`. Input already in kebab case is unchanged.
pub fn camel_to_kebab(name: &str) -> String {
    let mut out = String::with_capacity(name.len() + 4);
    for (i, c) in name.chars().enumerate() {
        if c.is_ascii_uppercase() {
            if i > 0 && !out.ends_with('-') {
                out.push('-');
            }
            out.push(c.to_ascii_lowercase());
        } else if c == '_' {
            out.push('-');
        } else {
            out.push(c);
        }
    }
    out
}

/// A name transform, selected per emitter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NameTransform {
    DedupeDoubledSegment,
    KebabToCamel,
    CamelToKebab,
}

impl NameTransform {
    pub fn apply(self, name: &str) -> String {
        match self {
            NameTransform::DedupeDoubledSegment => dedupe_doubled_segment(name),
            NameTransform::KebabToCamel => kebab_to_camel(name),
            NameTransform::CamelToKebab => camel_to_kebab(name),
        }
    }

    /// Applies transforms left to right.
    pub fn apply_all(transforms: &[NameTransform], name: &str) -> String {
        transforms
            .iter()
            .fold(name.to_string(), |acc, t| t.apply(&acc))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dedupe_doubled_segment() {
        assert_eq!(
            dedupe_doubled_segment("--color-color-icon-primary"),
            "--color-icon-primary"
        );
        assert_eq!(dedupe_doubled_segment("--color-icon-primary"), "--color-icon-primary");
        assert_eq!(dedupe_doubled_segment("--space-2-2"), "--space-2-2");
        assert_eq!(dedupe_doubled_segment("typography-typography-h1"), "typography-h1");
    }

    #[test]
    fn test_case_conversions() {
        assert_eq!(kebab_to_camel("font-size"), "fontSize");
        assert_eq!(kebab_to_camel("brand-primary-2"), "brandPrimary2");
        assert_eq!(kebab_to_camel("lineHeight"), "lineHeight");
        assert_eq!(camel_to_kebab("fontSize"), "font-size");
        assert_eq!(camel_to_kebab("letterSpacing"), "letter-spacing");
        assert_eq!(camel_to_kebab("font-weight"), "font-weight");
        assert_eq!(camel_to_kebab(&kebab_to_camel("text-decoration")), "text-decoration");
    }

    #[test]
    fn test_apply_all_runs_in_order() {
        let name = NameTransform::apply_all(
            &[NameTransform::DedupeDoubledSegment, NameTransform::KebabToCamel],
            "color-color-icon-primary",
        );
        assert_eq!(name, "colorIconPrimary");
    }
}
