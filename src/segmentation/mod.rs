//! Person/background segmentation pipeline.
//!
//! Orchestrates the three independent classifier passes (skin, hair,
//! clothing), combines them into a person mask, runs the fixed morphological
//! refinement, and applies the result to the alpha channel:
//!
//! classifiers → combine → erode → dilate → fill_holes → smooth_edges → alpha
//!
//! Every pixel whose refined mask bit is false becomes fully transparent;
//! mask-true pixels are untouched, alpha included. The output is a new
//! buffer; the input is consumed.

mod options;

pub use options::{EmptyMaskPolicy, SegmentationOptions};

use crate::classify::{clothing_mask, hair_mask, skin_mask};
use crate::error::Result;
use crate::image::RgbaBuffer;
use crate::mask::{self, morphology, Mask};
use log::debug;
use serde::Serialize;
use std::time::Instant;

/// Per-stage diagnostics for one segmentation run.
#[derive(Clone, Debug, Serialize)]
pub struct SegmentationReport {
    pub width: usize,
    pub height: usize,
    /// Set-pixel counts of the raw classifier masks.
    pub skin_pixels: usize,
    pub hair_pixels: usize,
    pub clothing_pixels: usize,
    /// Fraction of the refined mask that is foreground.
    pub coverage: f32,
    pub classify_ms: f64,
    pub refine_ms: f64,
    pub latency_ms: f64,
}

/// Segmented buffer plus the diagnostics gathered while producing it.
#[derive(Clone, Debug)]
pub struct SegmentationOutput {
    pub buffer: RgbaBuffer,
    pub mask: Mask,
    pub report: SegmentationReport,
}

/// Run the full segmentation pipeline over an owned buffer.
pub fn segment(buffer: RgbaBuffer, options: &SegmentationOptions) -> Result<SegmentationOutput> {
    let total_start = Instant::now();
    let (width, height) = buffer.dimensions();

    let classify_start = Instant::now();
    let skin = skin_mask(&buffer);
    let hair = hair_mask(&buffer);
    let clothing = clothing_mask(&buffer, &skin);
    let classify_ms = classify_start.elapsed().as_secs_f64() * 1000.0;
    debug!(
        "segment: classifier passes done skin={} hair={} clothing={}",
        skin.count_true(),
        hair.count_true(),
        clothing.count_true()
    );

    let skin_pixels = skin.count_true();
    let hair_pixels = hair.count_true();
    let clothing_pixels = clothing.count_true();

    let refine_start = Instant::now();
    let person = mask::combine(&[&skin, &hair, &clothing])?;
    let refined = morphology::smooth_edges(&morphology::fill_holes(&morphology::dilate(
        &morphology::erode(&person, options.erode_radius),
        options.dilate_radius,
    )));
    let refine_ms = refine_start.elapsed().as_secs_f64() * 1000.0;

    let coverage = refined.coverage();
    let buffer = if coverage == 0.0 && options.empty_mask_policy == EmptyMaskPolicy::KeepOriginal {
        debug!("segment: empty mask, keeping original buffer");
        buffer
    } else {
        apply_mask(buffer, &refined)
    };

    let latency_ms = total_start.elapsed().as_secs_f64() * 1000.0;
    debug!("segment: coverage={coverage:.3} latency_ms={latency_ms:.3}");

    Ok(SegmentationOutput {
        buffer,
        mask: refined,
        report: SegmentationReport {
            width,
            height,
            skin_pixels,
            hair_pixels,
            clothing_pixels,
            coverage,
            classify_ms,
            refine_ms,
            latency_ms,
        },
    })
}

/// Zero the alpha channel of every mask-false pixel.
fn apply_mask(mut buffer: RgbaBuffer, mask: &Mask) -> RgbaBuffer {
    let (width, height) = buffer.dimensions();
    for y in 0..height {
        for x in 0..width {
            if !mask.get(x, y) {
                buffer.set_alpha(x, y, 0);
            }
        }
    }
    buffer
}
