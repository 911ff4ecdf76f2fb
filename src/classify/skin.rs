use crate::color::{rgb_to_hsv, rgb_to_ycbcr};
use crate::image::RgbaBuffer;
use crate::mask::Mask;
use rayon::prelude::*;

/// Multi-color-space skin predicate.
///
/// True if the pixel falls in the YCbCr skin chroma band, or satisfies both
/// the HSV and RGB skin rules. The three rule sets compensate for each
/// other's lighting blind spots.
pub fn is_skin_color(r: u8, g: u8, b: u8) -> bool {
    let ycbcr = rgb_to_ycbcr(r, g, b);
    let ycbcr_skin =
        (133.0..=173.0).contains(&ycbcr.cr) && (77.0..=127.0).contains(&ycbcr.cb);

    let hsv = rgb_to_hsv(r, g, b);
    let hsv_skin = hsv.h <= 50.0 && (0.2..=0.7).contains(&hsv.s) && hsv.v >= 0.4;

    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let rgb_skin = r > 95
        && g > 40
        && b > 20
        && max - min > 15
        && (i16::from(r) - i16::from(g)).abs() > 15
        && r > g
        && r > b;

    ycbcr_skin || (hsv_skin && rgb_skin)
}

/// Full-image skin pass.
pub fn skin_mask(buffer: &RgbaBuffer) -> Mask {
    let (width, height) = buffer.dimensions();
    let mut bits = vec![false; width * height];
    bits.par_chunks_mut(width)
        .enumerate()
        .for_each(|(y, row_bits)| {
            let row = buffer.row(y);
            for (x, bit) in row_bits.iter_mut().enumerate() {
                let px = &row[x * 4..x * 4 + 4];
                *bit = is_skin_color(px[0], px[1], px[2]);
            }
        });
    Mask::from_bits(width, height, bits)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn light_skin_tone_is_detected() {
        assert!(is_skin_color(220, 180, 150));
    }

    #[test]
    fn saturated_primaries_are_rejected() {
        assert!(!is_skin_color(255, 0, 0));
        assert!(!is_skin_color(0, 255, 0));
        assert!(!is_skin_color(0, 0, 255));
    }

    #[test]
    fn grays_are_rejected() {
        assert!(!is_skin_color(255, 255, 255));
        assert!(!is_skin_color(128, 128, 128));
        assert!(!is_skin_color(0, 0, 0));
    }

    #[test]
    fn skin_mask_marks_only_skin_pixels() {
        let mut buffer = RgbaBuffer::filled(4, 4, [255, 255, 255, 255]).unwrap();
        buffer.set_pixel(1, 2, [220, 180, 150, 255]);
        let mask = skin_mask(&buffer);
        assert_eq!(mask.count_true(), 1);
        assert!(mask.get(1, 2));
    }
}
