use serde::Serialize;

/// Face-shape categories produced by the geometric decision list.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FaceShape {
    Oval,
    Round,
    Square,
    Heart,
    Long,
    Diamond,
    Triangle,
}

/// Primary skin-tone temperature.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SkinTone {
    Cool,
    Warm,
    Neutral,
}

/// Secondary hue classification nested within a primary tone.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SkinUndertone {
    Pink,
    Yellow,
    Olive,
}

/// A label with the confidence of the rule that produced it.
///
/// Confidence is always kept in `[0, 1]`.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct Classification<T> {
    pub label: T,
    pub confidence: f32,
}

impl<T> Classification<T> {
    pub fn new(label: T, confidence: f32) -> Self {
        Self {
            label,
            confidence: confidence.clamp(0.0, 1.0),
        }
    }
}

/// Combined face-shape + skin-tone report assembled by the analyzer.
#[derive(Clone, Debug, Serialize)]
pub struct AnalysisReport {
    pub face_shape: Classification<FaceShape>,
    pub skin_tone: Classification<SkinTone>,
    pub undertone: Classification<SkinUndertone>,
    /// Minimum of the component confidences.
    pub confidence: f32,
    pub latency_ms: f64,
}
