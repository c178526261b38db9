//! Palette-array shaping for component-theming consumers.
use swatch_types::Diagnostic;

/// The array length the theming library expects for every color.
pub const PALETTE_LENGTH: usize = 10;

/// The conventional shade order. Shades outside this list are appended,
/// ascending, after the standard ones.
pub const STANDARD_SHADES: [u32; 11] = [50, 100, 200, 300, 400, 500, 600, 700, 800, 900, 950];

/// True for purely numeric shade keys such as `500`.
pub fn is_shade_key(segment: &str) -> bool {
    !segment.is_empty() && segment.chars().all(|c| c.is_ascii_digit())
}

/// Orders `(shade, value)` pairs: standard shades in standard order, then
/// any other shades ascending.
pub fn order_shades<T>(mut entries: Vec<(u32, T)>) -> Vec<(u32, T)> {
    entries.sort_by_key(|(shade, _)| match STANDARD_SHADES.iter().position(|s| s == shade) {
        Some(pos) => (0, pos as u32),
        None => (1, *shade),
    });
    entries
}

/// Pads `values` up to `target` by repeating the last entry. Longer arrays
/// pass through untouched. A diagnostic is returned whenever padding happens.
pub fn pad_palette_array<T: Clone>(
    palette: &str,
    mut values: Vec<T>,
    target: usize,
) -> (Vec<T>, Option<Diagnostic>) {
    let authored = values.len();
    if authored >= target {
        return (values, None);
    }
    if let Some(last) = values.last().cloned() {
        values.resize(target, last);
    }
    let diagnostic = Diagnostic::PaletteUnderLength {
        palette: palette.to_string(),
        authored,
        padded_to: values.len(),
    };
    (values, Some(diagnostic))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pad_repeats_last_entry() {
        let (values, diag) = pad_palette_array("brand", vec!["#1", "#2", "#3"], PALETTE_LENGTH);
        assert_eq!(values.len(), 10);
        assert_eq!(values[2..], ["#3"; 8]);
        assert_eq!(
            diag,
            Some(Diagnostic::PaletteUnderLength {
                palette: "brand".to_string(),
                authored: 3,
                padded_to: 10,
            })
        );
    }

    #[test]
    fn test_exact_and_longer_arrays_pass_through() {
        let ten: Vec<u32> = (0..10).collect();
        let (values, diag) = pad_palette_array("gray", ten.clone(), PALETTE_LENGTH);
        assert_eq!(values, ten);
        assert!(diag.is_none());

        let eleven: Vec<u32> = (0..11).collect();
        let (values, diag) = pad_palette_array("gray", eleven, PALETTE_LENGTH);
        assert_eq!(values.len(), 11);
        assert!(diag.is_none());
    }

    #[test]
    fn test_empty_palette_still_reports() {
        let (values, diag) = pad_palette_array::<&str>("empty", vec![], PALETTE_LENGTH);
        assert!(values.is_empty());
        assert!(diag.is_some());
    }

    #[test]
    fn test_order_shades_appends_non_standard() {
        let ordered = order_shades(vec![(900, 'a'), (25, 'b'), (50, 'c'), (550, 'd'), (500, 'e')]);
        let shades: Vec<u32> = ordered.iter().map(|(s, _)| *s).collect();
        assert_eq!(shades, vec![50, 500, 900, 25, 550]);
    }

    #[test]
    fn test_shade_keys() {
        assert!(is_shade_key("500"));
        assert!(!is_shade_key("primary"));
        assert!(!is_shade_key("5a"));
        assert!(!is_shade_key(""));
    }
}
