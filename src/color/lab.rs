use nalgebra::{Matrix3, Vector3};

/// CIE-LAB under the D65 illuminant.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Lab {
    pub l: f32,
    pub a: f32,
    pub b: f32,
}

// D65 reference white.
const XN: f32 = 95.047;
const YN: f32 = 100.0;
const ZN: f32 = 108.883;

// Linear/cube-root switchover in the XYZ→LAB step.
const LAB_EPSILON: f32 = 0.008856;

/// sRGB gamma-decode → linear RGB → XYZ (standard 3×3 matrix) → LAB (D65).
pub fn rgb_to_lab(r: u8, g: u8, b: u8) -> Lab {
    let linear = Vector3::new(
        srgb_decode(f32::from(r) / 255.0),
        srgb_decode(f32::from(g) / 255.0),
        srgb_decode(f32::from(b) / 255.0),
    );

    let rgb_to_xyz = Matrix3::new(
        0.412_456_4, 0.357_576_1, 0.180_437_5, //
        0.212_672_9, 0.715_152_2, 0.072_175_0, //
        0.019_333_9, 0.119_192_0, 0.950_304_1,
    );
    let xyz = rgb_to_xyz * linear * 100.0;

    let fx = lab_f(xyz.x / XN);
    let fy = lab_f(xyz.y / YN);
    let fz = lab_f(xyz.z / ZN);

    Lab {
        l: 116.0 * fy - 16.0,
        a: 500.0 * (fx - fy),
        b: 200.0 * (fy - fz),
    }
}

#[inline]
fn srgb_decode(c: f32) -> f32 {
    if c > 0.04045 {
        ((c + 0.055) / 1.055).powf(2.4)
    } else {
        c / 12.92
    }
}

#[inline]
fn lab_f(t: f32) -> f32 {
    if t > LAB_EPSILON {
        t.cbrt()
    } else {
        7.787 * t + 16.0 / 116.0
    }
}
