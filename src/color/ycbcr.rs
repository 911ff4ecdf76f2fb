/// YCbCr triple on the 0..255 scale with chroma biased by +128.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct YCbCr {
    pub y: f32,
    pub cb: f32,
    pub cr: f32,
}

/// ITU-R BT.601 full-range conversion from 8-bit RGB.
#[inline]
pub fn rgb_to_ycbcr(r: u8, g: u8, b: u8) -> YCbCr {
    let (r, g, b) = (f32::from(r), f32::from(g), f32::from(b));
    YCbCr {
        y: 0.299 * r + 0.587 * g + 0.114 * b,
        cb: -0.169 * r - 0.331 * g + 0.5 * b + 128.0,
        cr: 0.5 * r - 0.419 * g - 0.081 * b + 128.0,
    }
}
