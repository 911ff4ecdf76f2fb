//! Ratio-based face-shape classification.
//!
//! An ordered decision list over four ratios derived from six geometric
//! measurements. First match wins; ties resolve by rule order, never by
//! magnitude. Total over any positive measurements.

use crate::types::{Classification, FaceShape};
use serde::Deserialize;

/// Confidence assigned when a specific rule fires.
const RULE_CONFIDENCE: f32 = 0.85;
/// Confidence of the default (oval) fallback.
const DEFAULT_CONFIDENCE: f32 = 0.7;

/// Six geometric widths/heights in pixels, measured externally (landmark
/// detector or synthetic estimate). This crate never computes landmarks.
#[derive(Clone, Copy, Debug, PartialEq, Deserialize)]
pub struct FaceMeasurement {
    pub face_width: f32,
    pub face_height: f32,
    pub jawline_width: f32,
    pub forehead_width: f32,
    pub cheekbone_width: f32,
    pub chin_width: f32,
}

impl FaceMeasurement {
    /// Synthetic measurement derived from image dimensions alone, for use
    /// when no landmark detector is available. The fractions assume a
    /// roughly centered, front-facing portrait.
    pub fn estimate(image_width: usize, image_height: usize) -> Self {
        let w = image_width as f32;
        let h = image_height as f32;
        Self {
            face_width: w * 0.6,
            face_height: h * 0.8,
            jawline_width: w * 0.5,
            forehead_width: w * 0.55,
            cheekbone_width: w * 0.58,
            chin_width: w * 0.35,
        }
    }
}

/// Classify a face shape from its measurements.
pub fn classify_face_shape(m: &FaceMeasurement) -> Classification<FaceShape> {
    let aspect = m.face_height / m.face_width;
    let jaw_to_forehead = m.jawline_width / m.forehead_width;
    let cheekbone_to_jaw = m.cheekbone_width / m.jawline_width;
    let cheekbone_to_forehead = m.cheekbone_width / m.forehead_width;

    if aspect > 1.5 && jaw_to_forehead > 0.8 {
        return Classification::new(FaceShape::Long, RULE_CONFIDENCE);
    }
    if aspect < 1.2 {
        if jaw_to_forehead > 0.9 && cheekbone_to_jaw < 1.1 {
            return Classification::new(FaceShape::Round, RULE_CONFIDENCE);
        }
        if jaw_to_forehead > 0.85 {
            return Classification::new(FaceShape::Square, RULE_CONFIDENCE);
        }
    }
    if jaw_to_forehead < 0.75 {
        if cheekbone_to_forehead > 0.9 {
            return Classification::new(FaceShape::Heart, RULE_CONFIDENCE);
        }
        return Classification::new(FaceShape::Triangle, RULE_CONFIDENCE);
    }
    if cheekbone_to_jaw > 1.15 && cheekbone_to_forehead > 1.1 {
        return Classification::new(FaceShape::Diamond, RULE_CONFIDENCE);
    }
    Classification::new(FaceShape::Oval, DEFAULT_CONFIDENCE)
}
