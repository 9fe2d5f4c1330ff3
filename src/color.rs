use std::collections::BTreeMap;

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
            let hsl = Hsl::new(hue, 0.75, 0.45);
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
// Color mapping: metodo → Color32
// ---------------------------------------------------------------------------

/// Assigns each method label a fixed colour so a method looks the same in
/// all three panels.
#[derive(Debug, Clone, Default)]
pub struct ColorMap {
    mapping: BTreeMap<String, Color32>,
}

impl ColorMap {
    /// Build the map from the sorted distinct method labels.
    pub fn new(metodos: &[String]) -> Self {
        let palette = generate_palette(metodos.len());
        let mapping = metodos
            .iter()
            .cloned()
            .zip(palette.into_iter())
            .collect();
        ColorMap { mapping }
    }

    /// Colour for a method label.
    pub fn color_for(&self, metodo: &str) -> Color32 {
        self.mapping.get(metodo).copied().unwrap_or(Color32::GRAY)
    }
}
