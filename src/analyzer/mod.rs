//! High-level facade over the segmentation and classification passes.
//!
//! [`PortraitAnalyzer`] exposes a simple API: feed an RGBA buffer (and,
//! for face-shape classification, externally measured geometry) and get
//! labeled results with diagnostics.
//!
//! Typical usage:
//! ```no_run
//! use portrait_analyzer::prelude::*;
//!
//! # fn example(buffer: RgbaBuffer) {
//! let analyzer = PortraitAnalyzer::new(AnalyzerParams::default());
//! let output = analyzer.segment_foreground(buffer).unwrap();
//! println!("coverage: {:.3}", output.report.coverage);
//! # }
//! ```

mod options;

pub use options::AnalyzerParams;

use crate::error::Result;
use crate::face_shape::{classify_face_shape, FaceMeasurement};
use crate::image::RgbaBuffer;
use crate::segmentation::{self, SegmentationOptions, SegmentationOutput};
use crate::skin_tone::{classify_skin_tone, SkinToneAnalysis};
use crate::types::{AnalysisReport, Classification, FaceShape};
use std::time::Instant;

/// Stateless service object bundling the pipeline entry points behind one
/// parameter set.
pub struct PortraitAnalyzer {
    params: AnalyzerParams,
}

impl PortraitAnalyzer {
    /// Create an analyzer with the supplied parameters.
    pub fn new(params: AnalyzerParams) -> Self {
        Self { params }
    }

    /// Segment the person region and alpha-out the background. Consumes the
    /// buffer and returns a new one plus diagnostics.
    pub fn segment_foreground(&self, buffer: RgbaBuffer) -> Result<SegmentationOutput> {
        segmentation::segment(buffer, &self.params.segmentation)
    }

    /// Classify a face shape from externally measured geometry.
    pub fn classify_face_shape(&self, measurement: &FaceMeasurement) -> Classification<FaceShape> {
        classify_face_shape(measurement)
    }

    /// Classify skin tone and undertone from the central patch.
    pub fn classify_skin_tone(&self, buffer: &RgbaBuffer) -> SkinToneAnalysis {
        classify_skin_tone(buffer)
    }

    /// Run both classifiers and assemble a combined report. The overall
    /// confidence is the minimum of the component confidences.
    pub fn analyze(&self, buffer: &RgbaBuffer, measurement: &FaceMeasurement) -> AnalysisReport {
        let start = Instant::now();
        let face_shape = classify_face_shape(measurement);
        let skin = classify_skin_tone(buffer);
        let confidence = face_shape.confidence.min(skin.tone.confidence);
        AnalysisReport {
            face_shape,
            skin_tone: skin.tone,
            undertone: skin.undertone,
            confidence,
            latency_ms: start.elapsed().as_secs_f64() * 1000.0,
        }
    }

    /// Replace the segmentation parameters.
    pub fn set_segmentation_options(&mut self, options: SegmentationOptions) {
        self.params.segmentation = options;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::SkinTone;

    #[test]
    fn analyze_takes_the_minimum_confidence() {
        let buffer = RgbaBuffer::filled(64, 64, [220, 180, 150, 255]).unwrap();
        // Balanced measurements fall through to oval at 0.7.
        let measurement = FaceMeasurement {
            face_width: 100.0,
            face_height: 140.0,
            jawline_width: 90.0,
            forehead_width: 100.0,
            cheekbone_width: 95.0,
            chin_width: 35.0,
        };
        let analyzer = PortraitAnalyzer::new(AnalyzerParams::default());
        let report = analyzer.analyze(&buffer, &measurement);
        assert_eq!(report.face_shape.label, FaceShape::Oval);
        assert_eq!(report.skin_tone.label, SkinTone::Warm);
        assert_eq!(report.confidence, 0.7);
    }
}
