//! Colour conversion for availability shading.
//!
//! The aggregation engine hands out HSL fill parameters; egui wants
//! RGBA, so the conversion lives here, next to the rendering code.

use egui::Color32;

use crate::services::aggregation::CellFill;

/// Convert an HSL fill (hue in degrees, saturation/lightness in percent,
/// alpha 0-1) to an egui colour.
pub fn fill_to_color32(fill: &CellFill) -> Color32 {
    let (r, g, b) = hsl_to_rgb(fill.hue, fill.saturation / 100.0, fill.lightness / 100.0);
    let a = (fill.opacity.clamp(0.0, 1.0) * 255.0).round() as u8;
    Color32::from_rgba_unmultiplied(r, g, b, a)
}

fn hsl_to_rgb(hue: f32, saturation: f32, lightness: f32) -> (u8, u8, u8) {
    let chroma = (1.0 - (2.0 * lightness - 1.0).abs()) * saturation;
    let sector = hue.rem_euclid(360.0) / 60.0;
    let x = chroma * (1.0 - (sector % 2.0 - 1.0).abs());

    let (r1, g1, b1) = match sector as u32 {
        0 => (chroma, x, 0.0),
        1 => (x, chroma, 0.0),
        2 => (0.0, chroma, x),
        3 => (0.0, x, chroma),
        4 => (x, 0.0, chroma),
        _ => (chroma, 0.0, x),
    };

    let m = lightness - chroma / 2.0;
    let to_byte = |channel: f32| ((channel + m) * 255.0).round().clamp(0.0, 255.0) as u8;
    (to_byte(r1), to_byte(g1), to_byte(b1))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pure_red() {
        assert_eq!(hsl_to_rgb(0.0, 1.0, 0.5), (255, 0, 0));
    }

    #[test]
    fn test_white_and_black() {
        assert_eq!(hsl_to_rgb(142.0, 0.8, 1.0), (255, 255, 255));
        assert_eq!(hsl_to_rgb(142.0, 0.8, 0.0), (0, 0, 0));
    }

    #[test]
    fn test_full_ratio_fill_is_green() {
        let fill = CellFill {
            hue: 142.0,
            saturation: 80.0,
            lightness: 30.0,
            opacity: 1.0,
        };
        let color = fill_to_color32(&fill);

        assert!(color.g() > color.r());
        assert!(color.g() > color.b());
        assert_eq!(color.a(), 255);
    }

    #[test]
    fn test_opacity_maps_to_alpha() {
        let fill = CellFill {
            hue: 142.0,
            saturation: 55.0,
            lightness: 55.0,
            opacity: 0.4,
        };
        assert_eq!(fill_to_color32(&fill).a(), 102);
    }
}
