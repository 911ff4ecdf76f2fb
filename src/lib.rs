#![doc = include_str!("../README.md")]

// Public modules (stable-ish surface)
pub mod analyzer;
pub mod error;
pub mod image;
pub mod segmentation;
pub mod types;

// Lower-level building blocks – still public for tools and experiments.
pub mod classify;
pub mod color;
pub mod config;
pub mod face_shape;
pub mod mask;
pub mod recolor;
pub mod skin_tone;

// --- High-level re-exports -------------------------------------------------

// Main entry points: analyzer + results.
pub use crate::analyzer::{AnalyzerParams, PortraitAnalyzer};
pub use crate::error::{Error, Result};
pub use crate::types::{AnalysisReport, Classification, FaceShape, SkinTone, SkinUndertone};

// Pipeline-level types callers commonly need.
pub use crate::face_shape::FaceMeasurement;
pub use crate::image::RgbaBuffer;
pub use crate::mask::Mask;
pub use crate::segmentation::{EmptyMaskPolicy, SegmentationOutput, SegmentationReport};
pub use crate::skin_tone::SkinToneAnalysis;

// --- Prelude ---------------------------------------------------------------

/// Small prelude for quick experiments.
///
/// ```no_run
/// use portrait_analyzer::prelude::*;
///
/// # fn main() {
/// let buffer = RgbaBuffer::filled(640, 480, [210, 170, 140, 255]).unwrap();
/// let analyzer = PortraitAnalyzer::new(AnalyzerParams::default());
/// let output = analyzer.segment_foreground(buffer).unwrap();
/// println!(
///     "coverage={:.3} latency_ms={:.3}",
///     output.report.coverage, output.report.latency_ms
/// );
/// # }
/// ```
pub mod prelude {
    pub use crate::face_shape::FaceMeasurement;
    pub use crate::image::RgbaBuffer;
    pub use crate::{AnalyzerParams, Classification, FaceShape, PortraitAnalyzer};
}
