//! A complete two-brand token source tree.

use serde_json::{Value, json};

pub fn global_colors() -> Value {
    json!({
        "color": {
            "base": {
                "white": { "value": "#ffffff", "type": "color" },
                "black": { "value": "#000000", "type": "color" }
            },
            "neutral": {
                "50": { "value": "#f8f9fa" },
                "100": { "value": "#f1f3f5" },
                "200": { "value": "#e9ecef" },
                "300": { "value": "#dee2e6" },
                "400": { "value": "#ced4da" },
                "500": { "value": "#adb5bd" },
                "600": { "value": "#868e96" },
                "700": { "value": "#495057" },
                "800": { "value": "#343a40" },
                "900": { "value": "#212529" }
            }
        }
    })
}

pub fn brand_colors(accent: &str, text: &str) -> Value {
    json!({
        "color": {
            "brand": {
                "50": { "value": accent },
                "100": { "value": accent },
                "500": { "value": accent },
                "700": { "value": accent },
                "900": { "value": accent },
                "950": { "value": accent }
            },
            "color": {
                "icon": { "primary": { "value": "{color.brand.500}" } }
            },
            "text": {
                "primary": { "value": text, "description": "Default body text" }
            },
            "gradient": {
                "hero": { "value": "linear-gradient(to right, {color.brand.500}, {color.base.white})" }
            }
        }
    })
}

pub fn spacing() -> Value {
    json!({ "spacing": { "sm": { "value": "4px" }, "md": { "value": "8px" }, "lg": { "value": "{spacing.md}" } } })
}

pub fn radius() -> Value {
    json!({ "radius": { "sm": { "value": "2px" }, "pill": { "value": "999px" } } })
}

pub fn breakpoints() -> Value {
    json!({ "breakpoint": { "tablet": { "value": "768px" }, "desktop": { "value": "1024px" } } })
}

pub fn fonts(family: &str) -> Value {
    json!({
        "font": {
            "family": {
                "body": { "value": format!("{}, sans-serif", family) },
                "heading": { "value": family }
            },
            "face": {
                "regular": {
                    "value": {
                        "fontFamily": "{font.family.heading}",
                        "src": [format!("/fonts/{}.woff2", family.to_lowercase())],
                        "fontWeight": 400,
                        "fontDisplay": "swap"
                    }
                }
            }
        }
    })
}

pub fn typography() -> Value {
    json!({
        "typography": {
            "body": {
                "value": {
                    "fontFamily": "{font.family.body}",
                    "fontSize": "16px",
                    "lineHeight": "24px"
                }
            },
            "heading": {
                "h1": {
                    "value": {
                        "fontFamily": "{font.family.heading}",
                        "mobile": { "fontSize": "28px" },
                        "desktop": { "fontSize": "48px" }
                    }
                }
            },
            "caption": {
                "value": { "fontFamily": "{font.family.body}", "fontSize": "12px", "fontWeight": 400 }
            }
        }
    })
}

/// Every source file of the fixture, relative to the source root.
pub fn source_files() -> Vec<(&'static str, Value)> {
    vec![
        ("color/global.json", global_colors()),
        ("color/brand-a.json", brand_colors("#1c7ed6", "#212529")),
        ("color/brand-a-dark.json", brand_colors("#4dabf7", "#f8f9fa")),
        ("color/brand-b.json", brand_colors("#e03131", "#343a40")),
        ("spacing.json", spacing()),
        ("radius.json", radius()),
        ("breakpoints.json", breakpoints()),
        ("fonts/a.json", fonts("Inter")),
        ("fonts/b.json", fonts("Lora")),
        ("typography/editorial/a.json", typography()),
        ("typography/editorial/b.json", typography()),
    ]
}
