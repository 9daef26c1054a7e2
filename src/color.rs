use eframe::egui::Color32;
use palette::{Hsl, IntoColor, Srgb};

use crate::data::model::Metric;

// ---------------------------------------------------------------------------
// Hue wheel
// ---------------------------------------------------------------------------

const SATURATION: f32 = 0.75;
const BASE_LIGHTNESS: f32 = 0.55;
/// Lightness of the "after" shade in the comparison chart.
const AFTER_LIGHTNESS: f32 = 0.72;

fn hsl_color(hue: f32, lightness: f32) -> Color32 {
    let rgb: Srgb = Hsl::new(hue, SATURATION, lightness).into_color();
    let [r, g, b] =
        [rgb.red, rgb.green, rgb.blue].map(|ch| (ch.clamp(0.0, 1.0) * 255.0).round() as u8);
    Color32::from_rgb(r, g, b)
}

/// Hues of `n` evenly spaced slots around the wheel.
fn hues(n: usize) -> impl Iterator<Item = f32> {
    (0..n).map(move |i| i as f32 * 360.0 / n as f32)
}

/// `n` visually distinct colours at the base lightness.
pub fn generate_palette(n: usize) -> Vec<Color32> {
    hues(n).map(|h| hsl_color(h, BASE_LIGHTNESS)).collect()
}

// ---------------------------------------------------------------------------
// Series colours
// ---------------------------------------------------------------------------

/// Colours for the two phases of a single-metric chart.
pub const BEFORE_COLOR: Color32 = Color32::from_rgb(31, 119, 180);
pub const AFTER_COLOR: Color32 = Color32::from_rgb(255, 127, 14);

/// One colour per metric, stable across charts.
pub fn metric_color(metric: Metric) -> Color32 {
    let palette = generate_palette(Metric::ALL.len());
    let slot = Metric::ALL
        .iter()
        .position(|m| *m == metric)
        .unwrap_or_default();
    palette[slot]
}

/// Colours for the comparison chart: one hue per model, the "after" series
/// a lighter shade of the same hue.
pub fn model_colors(n_models: usize) -> Vec<(Color32, Color32)> {
    hues(n_models)
        .map(|h| (hsl_color(h, BASE_LIGHTNESS), hsl_color(h, AFTER_LIGHTNESS)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn palette_is_distinct() {
        let p = generate_palette(7);
        assert_eq!(p.len(), 7);
        for (i, a) in p.iter().enumerate() {
            for b in &p[i + 1..] {
                assert_ne!(a, b);
            }
        }
        assert!(generate_palette(0).is_empty());
    }

    #[test]
    fn model_after_colour_differs_from_before() {
        for (before, after) in model_colors(3) {
            assert_ne!(before, after);
            let sum = |c: Color32| c.r() as u32 + c.g() as u32 + c.b() as u32;
            assert!(sum(after) > sum(before));
        }
    }

    #[test]
    fn first_slot_is_red() {
        let [red] = generate_palette(1)[..] else { panic!() };
        assert!(red.r() > red.g() && red.r() > red.b());
        assert_eq!(model_colors(2)[0].0, generate_palette(2)[0]);
    }
}
