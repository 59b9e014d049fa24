use std::collections::BTreeMap;

use eframe::egui::Color32;
use palette::{Hsl, IntoColor, Srgb};

// ---------------------------------------------------------------------------
// Color palette generator
// ---------------------------------------------------------------------------

/// Steel blue, the fallback series colour.
pub const STEEL_BLUE: Color32 = Color32::from_rgb(70, 130, 180);

/// Generates `n` visually distinct colours using evenly spaced hues,
/// starting from steel blue so a single-category dataset keeps it.
pub fn generate_palette(n: usize) -> Vec<Color32> {
    const BASE_HUE: f32 = 207.0;
    (0..n)
        .map(|i| {
            let hue = (BASE_HUE + (i as f32 / n as f32) * 360.0) % 360.0;
            let hsl = Hsl::new(hue, 0.44, 0.49);
            let rgb: Srgb = hsl.into_color();
            Color32::from_rgb(
                (rgb.red * 255.0) as u8,
                (rgb.green * 255.0) as u8,
                (rgb.blue * 255.0) as u8,
            )
        })
        .collect()
}

/// Washed-out variant of `color` used for the "Peak Today" bars.
pub fn faded(color: Color32) -> Color32 {
    Color32::from_rgba_unmultiplied(color.r(), color.g(), color.b(), 110)
}

// ---------------------------------------------------------------------------
// Color mapping: price category → Color32
// ---------------------------------------------------------------------------

/// Maps each price category to a distinct colour.
#[derive(Debug, Clone, Default)]
pub struct CategoryColors {
    mapping: BTreeMap<String, Color32>,
}

impl CategoryColors {
    /// Build a colour map, assigning colours in the order categories are given.
    pub fn new(categories: &[String]) -> Self {
        let mapping = categories
            .iter()
            .cloned()
            .zip(generate_palette(categories.len()))
            .collect();
        CategoryColors { mapping }
    }

    /// Look up the colour for a category.
    pub fn color_for(&self, category: &str) -> Color32 {
        self.mapping.get(category).copied().unwrap_or(STEEL_BLUE)
    }

    /// Return the legend entries (category → colour) for the UI.
    pub fn legend_entries(&self) -> Vec<(String, Color32)> {
        self.mapping.iter().map(|(c, col)| (c.clone(), *col)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn palette_has_requested_size() {
        assert!(generate_palette(0).is_empty());
        assert_eq!(generate_palette(3).len(), 3);
    }

    #[test]
    fn categories_get_distinct_colors() {
        let cats = vec!["Free".to_string(), "Paid".to_string()];
        let colors = CategoryColors::new(&cats);
        assert_eq!(colors.legend_entries().len(), 2);
        assert_ne!(colors.color_for("Free"), colors.color_for("Paid"));
        assert_eq!(colors.color_for("Unknown"), STEEL_BLUE);
    }

    #[test]
    fn faded_keeps_hue() {
        let c = faded(STEEL_BLUE);
        assert_eq!(c.a(), 110);
    }
}
