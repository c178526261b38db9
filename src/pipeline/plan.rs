//! Which emitters run for a build key, and where their output goes.

use super::config::BuildConfig;
use swatch_emit::{
    BrandPaletteEmitter, CssVariableEmitter, DataShape, Emitter, FontFaceEmitter, PlatformDataEmitter,
    TokenFilter, TypographyClassEmitter,
};
use swatch_types::BuildKey;

/// The emitters for one build key, in emission order.
pub fn emitters_for(key: &BuildKey, config: &BuildConfig) -> Vec<Emitter> {
    let brand = key.brand.slug();
    match key.mode {
        Some(mode) => {
            let mode = mode.slug();
            let css = || TokenFilter::domains(&["color", "spacing", "radius"]);
            let mut emitters: Vec<Emitter> =
                vec![CssVariableEmitter::new(format!("web/{}/variables-{}.css", brand, mode), css()).into()];
            if config.tailwind_theme {
                emitters.push(
                    CssVariableEmitter::new(format!("web/{}/theme-{}.css", brand, mode), css())
                        .with_tailwind_theme(true)
                        .into(),
                );
            }
            emitters.push(BrandPaletteEmitter::new(format!("mantine/{}/colors-{}.ts", brand, mode)).into());
            emitters.push(
                PlatformDataEmitter::new(
                    format!("native/{}/colors-{}.js", brand, mode),
                    TokenFilter::domains(&["color"]),
                )
                .into(),
            );
            emitters.push(
                PlatformDataEmitter::new(
                    format!("native/{}/dimensions-{}.js", brand, mode),
                    TokenFilter::domains(&["spacing", "radius"]),
                )
                .into(),
            );
            emitters
        }
        None => vec![
            TypographyClassEmitter::new(format!("web/{}/typography.css", brand)).into(),
            FontFaceEmitter::new(format!("web/{}/fonts.css", brand)).into(),
            PlatformDataEmitter::new(
                format!("native/{}/typography.js", brand),
                TokenFilter::domains(&["typography"]),
            )
            .with_shape(DataShape::Typography)
            .into(),
            PlatformDataEmitter::new(format!("native/{}/fonts.js", brand), TokenFilter::domains(&["font"])).into(),
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use swatch_emit::Emit;
    use swatch_types::{Brand, Mode};

    fn paths(key: BuildKey, config: &BuildConfig) -> Vec<String> {
        emitters_for(&key, config)
            .iter()
            .map(|e| e.output_path().to_string())
            .collect()
    }

    #[test]
    fn test_themed_outputs() {
        let config = BuildConfig::default();
        assert_eq!(
            paths(BuildKey::themed(Brand::B, Mode::Dark), &config),
            vec![
                "web/b/variables-dark.css",
                "web/b/theme-dark.css",
                "mantine/b/colors-dark.ts",
                "native/b/colors-dark.js",
                "native/b/dimensions-dark.js",
            ]
        );
    }

    #[test]
    fn test_tailwind_variant_is_optional() {
        let config = BuildConfig {
            tailwind_theme: false,
            ..Default::default()
        };
        let outputs = paths(BuildKey::themed(Brand::A, Mode::Light), &config);
        assert!(!outputs.iter().any(|p| p.contains("theme-")));
    }

    #[test]
    fn test_brand_outputs() {
        assert_eq!(
            paths(BuildKey::brand(Brand::A), &BuildConfig::default()),
            vec![
                "web/a/typography.css",
                "web/a/fonts.css",
                "native/a/typography.js",
                "native/a/fonts.js",
            ]
        );
    }
}
