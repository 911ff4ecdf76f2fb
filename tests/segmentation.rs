mod common;

use common::synthetic_image::{portrait_rgba, uniform_rgba};
use portrait_analyzer::segmentation::{EmptyMaskPolicy, SegmentationOptions};
use portrait_analyzer::{AnalyzerParams, PortraitAnalyzer};

#[test]
fn portrait_keeps_person_and_clears_background() {
    let buffer = portrait_rgba(64, 64);
    let analyzer = PortraitAnalyzer::new(AnalyzerParams::default());
    let output = analyzer.segment_foreground(buffer).unwrap();

    assert_eq!(output.report.width, 64);
    assert_eq!(output.report.height, 64);
    assert!(output.report.skin_pixels > 0);
    assert!(output.report.hair_pixels > 0);
    assert!(output.report.clothing_pixels > 0);
    assert!(
        output.report.coverage > 0.2 && output.report.coverage < 0.95,
        "coverage={}",
        output.report.coverage
    );

    // Face center survives refinement with original alpha.
    assert_eq!(output.buffer.pixel(32, 28), [220, 180, 150, 255]);
    // Background corners are alphaed out.
    assert_eq!(output.buffer.pixel(0, 0)[3], 0);
    assert_eq!(output.buffer.pixel(63, 0)[3], 0);

    // Mask and buffer agree pixel-for-pixel on transparency.
    for y in 0..64 {
        for x in 0..64 {
            let alpha = output.buffer.pixel(x, y)[3];
            if output.mask.get(x, y) {
                assert_eq!(alpha, 255, "({x},{y}) foreground lost alpha");
            } else {
                assert_eq!(alpha, 0, "({x},{y}) background kept alpha");
            }
        }
    }
}

#[test]
fn uniform_bright_image_yields_fully_transparent_output() {
    let buffer = uniform_rgba(48, 48, [255, 255, 255, 255]);
    let analyzer = PortraitAnalyzer::new(AnalyzerParams::default());
    let output = analyzer.segment_foreground(buffer).unwrap();

    assert_eq!(output.report.coverage, 0.0);
    assert!(output.buffer.as_bytes().chunks_exact(4).all(|px| px[3] == 0));
}

#[test]
fn keep_original_policy_preserves_degenerate_input() {
    let buffer = uniform_rgba(48, 48, [255, 255, 255, 255]);
    let mut analyzer = PortraitAnalyzer::new(AnalyzerParams::default());
    analyzer.set_segmentation_options(SegmentationOptions {
        empty_mask_policy: EmptyMaskPolicy::KeepOriginal,
        ..Default::default()
    });
    let output = analyzer.segment_foreground(buffer.clone()).unwrap();
    assert_eq!(output.buffer, buffer);
}

#[test]
fn segmentation_is_deterministic() {
    let analyzer = PortraitAnalyzer::new(AnalyzerParams::default());
    let a = analyzer.segment_foreground(portrait_rgba(64, 64)).unwrap();
    let b = analyzer.segment_foreground(portrait_rgba(64, 64)).unwrap();
    assert_eq!(a.buffer, b.buffer);
    assert_eq!(a.mask, b.mask);
}
