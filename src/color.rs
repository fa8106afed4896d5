use palette::{Hsl, IntoColor, Srgb};
use plotters::style::RGBColor;

use crate::data::model::Species;

// ---------------------------------------------------------------------------
// Class palette
// ---------------------------------------------------------------------------

/// Generates `n` visually distinct colours using evenly spaced hues.
pub fn generate_palette(n: usize) -> Vec<RGBColor> {
    (0..n)
        .map(|i| {
            let hue = (i as f32 / n as f32) * 360.0;
            hsl_to_rgb(hue, 0.75, 0.45)
        })
        .collect()
}

/// The fixed three-colour palette used everywhere a chart is partitioned by
/// species. Index order follows [`Species::ALL`], so the same species always
/// gets the same colour across every chart in the catalogue.
pub fn class_color(species: Species) -> RGBColor {
    let palette = generate_palette(Species::ALL.len());
    palette[Species::ALL.iter().position(|&s| s == species).unwrap_or(0)]
}

/// Map a correlation coefficient in [-1, 1] onto a blue→white→red ramp for
/// the heatmap cells.
pub fn correlation_color(r: f64) -> RGBColor {
    let t = ((r + 1.0) / 2.0).clamp(0.0, 1.0) as f32;
    // Hue sweeps from 240° (blue, r = -1) to 0° (red, r = +1); saturation
    // dips toward white around r = 0.
    let hue = 240.0 * (1.0 - t);
    let saturation = (2.0 * t - 1.0).abs() * 0.85;
    let lightness = 0.95 - 0.35 * (2.0 * t - 1.0).abs();
    hsl_to_rgb(hue, saturation, lightness)
}

fn hsl_to_rgb(hue: f32, saturation: f32, lightness: f32) -> RGBColor {
    let rgb: Srgb = Hsl::new(hue, saturation, lightness).into_color();
    RGBColor(
        (rgb.red * 255.0) as u8,
        (rgb.green * 255.0) as u8,
        (rgb.blue * 255.0) as u8,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn palette_yields_distinct_colors() {
        let palette = generate_palette(3);
        assert_eq!(palette.len(), 3);
        assert_ne!(palette[0], palette[1]);
        assert_ne!(palette[1], palette[2]);
        assert_ne!(palette[0], palette[2]);
    }

    #[test]
    fn class_colors_are_stable_per_species() {
        for species in Species::ALL {
            assert_eq!(class_color(species), class_color(species));
        }
        assert_ne!(
            class_color(Species::Setosa),
            class_color(Species::Virginica)
        );
    }

    #[test]
    fn correlation_ramp_endpoints() {
        let lo = correlation_color(-1.0);
        let hi = correlation_color(1.0);
        // Blue-dominant at -1, red-dominant at +1.
        assert!(lo.2 > lo.0);
        assert!(hi.0 > hi.2);
    }
}
