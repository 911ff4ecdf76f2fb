use crate::image::RgbaBuffer;
use crate::mask::Mask;
use rayon::prelude::*;

/// Vertical band (as fractions of image height) eligible for hair pixels.
pub const HAIR_BAND_TOP: f32 = 0.05;
pub const HAIR_BAND_BOTTOM: f32 = 0.55;

/// Dark-pixel hair predicate, applied only inside the upper band.
///
/// Hair is assumed dark: mean brightness under 140 with either some chroma
/// spread or near-black brightness.
pub fn is_hair_pixel(r: u8, g: u8, b: u8, y: usize, height: usize) -> bool {
    let top = (height as f32 * HAIR_BAND_TOP) as usize;
    let bottom = (height as f32 * HAIR_BAND_BOTTOM) as usize;
    if y < top || y >= bottom {
        return false;
    }

    let brightness = (f32::from(r) + f32::from(g) + f32::from(b)) / 3.0;
    let max = f32::from(r.max(g).max(b));
    let min = f32::from(r.min(g).min(b));
    let saturation_range = if max == 0.0 { 0.0 } else { (max - min) / max };

    brightness < 140.0 && (saturation_range > 0.1 || brightness < 80.0)
}

/// Full-image hair pass; rows outside the band stay clear.
pub fn hair_mask(buffer: &RgbaBuffer) -> Mask {
    let (width, height) = buffer.dimensions();
    let mut bits = vec![false; width * height];
    bits.par_chunks_mut(width)
        .enumerate()
        .for_each(|(y, row_bits)| {
            let row = buffer.row(y);
            for (x, bit) in row_bits.iter_mut().enumerate() {
                let px = &row[x * 4..x * 4 + 4];
                *bit = is_hair_pixel(px[0], px[1], px[2], y, height);
            }
        });
    Mask::from_bits(width, height, bits)
}
