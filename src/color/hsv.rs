/// HSV with hue in degrees `[0, 360)` and saturation/value in `[0, 1]`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Hsv {
    pub h: f32,
    pub s: f32,
    pub v: f32,
}

/// Standard max/min/diff hue-sector conversion from 8-bit RGB.
pub fn rgb_to_hsv(r: u8, g: u8, b: u8) -> Hsv {
    let (rf, gf, bf) = (f32::from(r), f32::from(g), f32::from(b));
    let max = rf.max(gf).max(bf);
    let min = rf.min(gf).min(bf);
    let diff = max - min;

    let mut h = if diff == 0.0 {
        0.0
    } else if max == rf {
        ((gf - bf) / diff) % 6.0
    } else if max == gf {
        (bf - rf) / diff + 2.0
    } else {
        (rf - gf) / diff + 4.0
    };
    h *= 60.0;
    if h < 0.0 {
        h += 360.0;
    }

    let s = if max == 0.0 { 0.0 } else { diff / max };
    let v = max / 255.0;
    Hsv { h, s, v }
}
