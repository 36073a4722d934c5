use std::collections::{BTreeMap, BTreeSet};

use eframe::egui::Color32;
use palette::{Hsl, IntoColor, Srgb};

// ---------------------------------------------------------------------------
// Color palette generator
// ---------------------------------------------------------------------------

/// Generates `n` visually distinct colours using evenly spaced hues.
pub fn generate_palette(n: usize) -> Vec<Color32> {
    if n == 0 {
        return Vec::new();
    }
    (0..n)
        .map(|i| {
            let hue = (i as f32 / n as f32) * 360.0;
            let hsl = Hsl::new(hue, 0.75, 0.55);
            let rgb: Srgb = hsl.into_color();
            Color32::from_rgb(
                (rgb.red * 255.0) as u8,
                (rgb.green * 255.0) as u8,
                (rgb.blue * 255.0) as u8,
            )
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Color mapping: category label → Color32
// ---------------------------------------------------------------------------

/// Maps categorical labels (booster version categories, pie slice labels)
/// to distinct colours.
#[derive(Debug, Clone, Default)]
pub struct ColorMap {
    mapping: BTreeMap<String, Color32>,
}

impl ColorMap {
    /// Build a colour map from a sorted set of unique labels.
    pub fn new(labels: &BTreeSet<String>) -> Self {
        let palette = generate_palette(labels.len());
        let mapping = labels
            .iter()
            .cloned()
            .zip(palette.into_iter())
            .collect();
        ColorMap { mapping }
    }

    /// Look up the colour for a label; unknown labels fall back to grey.
    pub fn color_for(&self, label: &str) -> Color32 {
        self.mapping.get(label).copied().unwrap_or(Color32::GRAY)
    }
}
