use crate::image::RgbaBuffer;
use crate::mask::Mask;
use rayon::prelude::*;

/// Top of the clothing band as a fraction of image height.
pub const CLOTHING_BAND_TOP: f32 = 0.4;

/// Coarse "not a flat, bright background" predicate for the lower band.
///
/// A pixel already marked as skin is never clothing; otherwise it counts as
/// clothing when its color variance around the channel mean exceeds 100 or
/// it is darker than 200.
pub fn is_clothing_pixel(r: u8, g: u8, b: u8, y: usize, height: usize, is_skin: bool) -> bool {
    let top = (height as f32 * CLOTHING_BAND_TOP) as usize;
    if y < top || is_skin {
        return false;
    }

    let (rf, gf, bf) = (f32::from(r), f32::from(g), f32::from(b));
    let brightness = (rf + gf + bf) / 3.0;
    let variance = (rf - brightness).powi(2) + (gf - brightness).powi(2) + (bf - brightness).powi(2);

    variance > 100.0 || brightness < 200.0
}

/// Full-image clothing pass. Reads `skin` to exclude pixels already claimed
/// by the skin pass; `skin` must have the buffer's dimensions.
pub fn clothing_mask(buffer: &RgbaBuffer, skin: &Mask) -> Mask {
    debug_assert_eq!(skin.dimensions(), buffer.dimensions());
    let (width, height) = buffer.dimensions();
    let mut bits = vec![false; width * height];
    bits.par_chunks_mut(width)
        .enumerate()
        .for_each(|(y, row_bits)| {
            let row = buffer.row(y);
            for (x, bit) in row_bits.iter_mut().enumerate() {
                let px = &row[x * 4..x * 4 + 4];
                *bit = is_clothing_pixel(px[0], px[1], px[2], y, height, skin.get(x, y));
            }
        });
    Mask::from_bits(width, height, bits)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn colorful_lower_band_pixel_is_clothing() {
        // Strong chroma: variance far above 100.
        assert!(is_clothing_pixel(200, 40, 40, 80, 100, false));
    }

    #[test]
    fn dark_flat_pixel_is_clothing_by_brightness() {
        assert!(is_clothing_pixel(120, 120, 120, 80, 100, false));
    }

    #[test]
    fn bright_flat_background_is_rejected() {
        assert!(!is_clothing_pixel(250, 250, 250, 80, 100, false));
    }

    #[test]
    fn skin_pixels_are_excluded() {
        assert!(!is_clothing_pixel(120, 120, 120, 80, 100, true));
    }

    #[test]
    fn upper_band_is_never_clothing() {
        assert!(!is_clothing_pixel(120, 120, 120, 10, 100, false));
    }

    #[test]
    fn clothing_mask_starts_at_band_top() {
        let buffer = RgbaBuffer::filled(4, 10, [100, 100, 100, 255]).unwrap();
        let skin = Mask::new(4, 10);
        let mask = clothing_mask(&buffer, &skin);
        assert!(!mask.get(0, 3));
        assert!(mask.get(0, 4));
        assert!(mask.get(0, 9));
    }
}
