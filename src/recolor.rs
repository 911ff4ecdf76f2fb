//! Hair recoloring via an HSL round trip.
//!
//! Pixels matched by the hair pass adopt the target color's hue and
//! saturation while keeping their own lightness, so strand shading survives
//! the recolor. Non-hair pixels and all alpha values pass through unchanged.

use crate::classify::hair_mask;
use crate::color::{hsl_to_rgb, rgb_to_hsl};
use crate::image::RgbaBuffer;
use log::debug;

/// Recolor detected hair toward `target` RGB, preserving per-pixel
/// lightness. Returns a new buffer; the input is consumed.
pub fn recolor_hair(buffer: RgbaBuffer, target: [u8; 3]) -> RgbaBuffer {
    let mask = hair_mask(&buffer);
    let target_hsl = rgb_to_hsl(target[0], target[1], target[2]);
    debug!(
        "recolor_hair: {} hair pixels, target h={:.3} s={:.3}",
        mask.count_true(),
        target_hsl.h,
        target_hsl.s
    );

    let mut buffer = buffer;
    let (width, height) = buffer.dimensions();
    for y in 0..height {
        for x in 0..width {
            if !mask.get(x, y) {
                continue;
            }
            let [r, g, b, a] = buffer.pixel(x, y);
            let original = rgb_to_hsl(r, g, b);
            let (nr, ng, nb) = hsl_to_rgb(target_hsl.h, target_hsl.s, original.l);
            buffer.set_pixel(x, y, [nr, ng, nb, a]);
        }
    }
    buffer
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::rgb_to_hsl;

    #[test]
    fn hair_pixels_keep_their_lightness() {
        // Dark brown hair band pixel.
        let buffer = RgbaBuffer::filled(10, 100, [90, 70, 60, 255]).unwrap();
        let before = rgb_to_hsl(90, 70, 60);
        let out = recolor_hair(buffer, [200, 40, 40]);

        // Row 20 is inside the hair band.
        let [r, g, b, a] = out.pixel(5, 20);
        let after = rgb_to_hsl(r, g, b);
        assert_eq!(a, 255);
        assert!(
            (after.l - before.l).abs() < 0.01,
            "lightness drifted: {} -> {}",
            before.l,
            after.l
        );
        // Hue moved toward the red target (compare on the hue circle).
        let target = rgb_to_hsl(200, 40, 40);
        let delta = (after.h - target.h).abs();
        assert!(delta.min(1.0 - delta) < 0.02, "hue off target: {delta}");
    }

    #[test]
    fn non_hair_rows_are_untouched() {
        let buffer = RgbaBuffer::filled(10, 100, [90, 70, 60, 255]).unwrap();
        let out = recolor_hair(buffer, [200, 40, 40]);
        // Row 80 is below the hair band.
        assert_eq!(out.pixel(5, 80), [90, 70, 60, 255]);
        // Row 2 is above it.
        assert_eq!(out.pixel(5, 2), [90, 70, 60, 255]);
    }
}
