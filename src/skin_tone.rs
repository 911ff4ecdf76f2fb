//! Skin tone and undertone classification from a sampled central patch.
//!
//! Samples a square patch of side `0.1 · min(width, height)` centered on the
//! image, averages its RGB, and converts the average to CIE-LAB. The a*/b*
//! signs decide the tone; the undertone nests within the tone via channel
//! comparisons on the averaged RGB.

use crate::color::{rgb_to_lab, Lab};
use crate::image::RgbaBuffer;
use crate::types::{Classification, SkinTone, SkinUndertone};
use log::debug;

/// Patch side as a fraction of the smaller image dimension.
const SAMPLE_FRACTION: f32 = 0.1;
const TONE_CONFIDENCE: f32 = 0.8;

/// Tone + undertone pair for one image.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SkinToneAnalysis {
    pub tone: Classification<SkinTone>,
    pub undertone: Classification<SkinUndertone>,
}

/// Classify skin tone and undertone from the central patch. Total over any
/// well-formed buffer; worst case is a neutral/yellow default, never an
/// error.
pub fn classify_skin_tone(buffer: &RgbaBuffer) -> SkinToneAnalysis {
    let (width, height) = buffer.dimensions();
    let side = ((width.min(height) as f32 * SAMPLE_FRACTION) as usize).max(1);
    let x0 = (width - side) / 2;
    let y0 = (height - side) / 2;

    let mut sum_r = 0u64;
    let mut sum_g = 0u64;
    let mut sum_b = 0u64;
    for y in y0..y0 + side {
        for x in x0..x0 + side {
            let [r, g, b, _] = buffer.pixel(x, y);
            sum_r += u64::from(r);
            sum_g += u64::from(g);
            sum_b += u64::from(b);
        }
    }
    let count = (side * side) as f64;
    let avg_r = (sum_r as f64 / count) as f32;
    let avg_g = (sum_g as f64 / count) as f32;
    let avg_b = (sum_b as f64 / count) as f32;

    let lab = rgb_to_lab(
        avg_r.round() as u8,
        avg_g.round() as u8,
        avg_b.round() as u8,
    );
    debug!(
        "classify_skin_tone: patch {side}x{side} avg=({avg_r:.1},{avg_g:.1},{avg_b:.1}) \
         lab=({:.1},{:.1},{:.1})",
        lab.l, lab.a, lab.b
    );

    let (tone, undertone) = tone_rules(lab, avg_r, avg_g, avg_b);
    SkinToneAnalysis {
        tone: Classification::new(tone, TONE_CONFIDENCE),
        undertone: Classification::new(undertone, TONE_CONFIDENCE),
    }
}

/// Tone from the a*/b* signs, undertone from channel dominance conditioned
/// on the tone.
fn tone_rules(lab: Lab, avg_r: f32, avg_g: f32, avg_b: f32) -> (SkinTone, SkinUndertone) {
    if lab.a > 0.0 && lab.b > 0.0 {
        let undertone = if avg_r > avg_g + 10.0 {
            SkinUndertone::Pink
        } else {
            SkinUndertone::Yellow
        };
        (SkinTone::Warm, undertone)
    } else if lab.a < 0.0 {
        let undertone = if avg_b > avg_r + 5.0 {
            SkinUndertone::Pink
        } else {
            SkinUndertone::Olive
        };
        (SkinTone::Cool, undertone)
    } else {
        (SkinTone::Neutral, SkinUndertone::Yellow)
    }
}
