use serde::Deserialize;

/// What `segment` returns when the refined mask ends up all-false (no
/// foreground detected at all).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EmptyMaskPolicy {
    /// Alpha-out everything, yielding a fully transparent image.
    #[default]
    Transparent,
    /// Return the input buffer untouched.
    KeepOriginal,
}

/// Parameters for the segmentation pass.
///
/// The defaults are the tuned values the classifier thresholds were
/// calibrated against; change them only for experimentation.
#[derive(Clone, Copy, Debug, Deserialize)]
#[serde(default)]
pub struct SegmentationOptions {
    /// Square-window radius of the denoising erosion.
    pub erode_radius: usize,
    /// Circular-kernel radius of the compensating dilation.
    pub dilate_radius: usize,
    pub empty_mask_policy: EmptyMaskPolicy,
}

impl Default for SegmentationOptions {
    fn default() -> Self {
        Self {
            erode_radius: 2,
            dilate_radius: 3,
            empty_mask_policy: EmptyMaskPolicy::default(),
        }
    }
}
