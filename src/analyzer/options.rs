use crate::segmentation::SegmentationOptions;
use serde::Deserialize;

/// Analyzer-wide parameters. Currently the segmentation pass carries all the
/// tunable knobs; the classification rules are fixed by calibration.
#[derive(Clone, Copy, Debug, Default, Deserialize)]
#[serde(default)]
pub struct AnalyzerParams {
    pub segmentation: SegmentationOptions,
}
