//! Predictor Types
//!
//! Data structures only. Scoring lives in `scoring`, normalization in
//! `softmax`, the prediction entry point in `classifier`.

use serde::{Deserialize, Serialize};

use super::layout::{FEATURE_COUNT, FEATURE_LAYOUT};

// ============================================================================
// FEATURE VECTOR
// ============================================================================

/// The five EEG channel statistics consumed by the predictor.
///
/// No bounds are enforced here; see [`super::layout`] for the ranges the
/// page offers.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FeatureVector {
    /// Frontal mean amplitude
    pub fz_mean: f64,
    /// Frontal variability
    pub fz_std: f64,
    /// Left motor cortex mean
    pub c3_mean: f64,
    /// Central mean
    pub cz_mean: f64,
    /// Right motor cortex mean
    pub c4_mean: f64,
}

impl FeatureVector {
    pub fn new(fz_mean: f64, fz_std: f64, c3_mean: f64, cz_mean: f64, c4_mean: f64) -> Self {
        Self { fz_mean, fz_std, c3_mean, cz_mean, c4_mean }
    }

    /// Values in `FEATURE_LAYOUT` order
    pub fn as_array(&self) -> [f64; FEATURE_COUNT] {
        [self.fz_mean, self.fz_std, self.c3_mean, self.cz_mean, self.c4_mean]
    }

    /// Build from values in `FEATURE_LAYOUT` order
    pub fn from_array(values: [f64; FEATURE_COUNT]) -> Self {
        let [fz_mean, fz_std, c3_mean, cz_mean, c4_mean] = values;
        Self { fz_mean, fz_std, c3_mean, cz_mean, c4_mean }
    }

    /// Get feature by name
    pub fn get_by_name(&self, name: &str) -> Option<f64> {
        super::layout::feature_index(name).map(|i| self.as_array()[i])
    }

    /// Same vector with the C3 and C4 means exchanged (left/right mirror)
    pub fn mirrored(&self) -> Self {
        Self {
            c3_mean: self.c4_mean,
            c4_mean: self.c3_mean,
            ..*self
        }
    }
}

impl Default for FeatureVector {
    /// Slider start position
    fn default() -> Self {
        let mut values = [0.0; FEATURE_COUNT];
        for (value, spec) in values.iter_mut().zip(FEATURE_LAYOUT.iter()) {
            *value = spec.default;
        }
        Self::from_array(values)
    }
}

// ============================================================================
// CLASS LABEL
// ============================================================================

/// Motor imagery classes, in output order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ClassLabel {
    Left,
    Right,
    Foot,
    Tongue,
}

/// Number of classes
pub const CLASS_COUNT: usize = 4;

impl ClassLabel {
    /// Fixed output order; also the argmax tie-break order
    pub const ALL: [ClassLabel; CLASS_COUNT] = [
        ClassLabel::Left,
        ClassLabel::Right,
        ClassLabel::Foot,
        ClassLabel::Tongue,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ClassLabel::Left => "Left",
            ClassLabel::Right => "Right",
            ClassLabel::Foot => "Foot",
            ClassLabel::Tongue => "Tongue",
        }
    }

    /// Position in [`ClassLabel::ALL`]
    pub fn index(&self) -> usize {
        match self {
            ClassLabel::Left => 0,
            ClassLabel::Right => 1,
            ClassLabel::Foot => 2,
            ClassLabel::Tongue => 3,
        }
    }

    /// Result flourish shown by the page for this class
    pub fn visual(&self) -> ClassVisual {
        match self {
            ClassLabel::Left => ClassVisual { direction: "translateX(-60px)", hue: "180deg" },
            ClassLabel::Right => ClassVisual { direction: "translateX(60px)", hue: "220deg" },
            ClassLabel::Foot => ClassVisual { direction: "translateY(60px)", hue: "140deg" },
            ClassLabel::Tongue => ClassVisual { direction: "translateY(-60px)", hue: "300deg" },
        }
    }
}

impl std::fmt::Display for ClassLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// CSS hints for the class-specific result visual
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ClassVisual {
    /// CSS transform applied to the orb
    pub direction: &'static str,
    /// `hue-rotate` applied to the swirl
    pub hue: &'static str,
}

// ============================================================================
// SCORES
// ============================================================================

/// Unnormalized per-class scores
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ClassScores {
    pub left: f64,
    pub right: f64,
    pub foot: f64,
    pub tongue: f64,
}

impl ClassScores {
    /// Scores in [`ClassLabel::ALL`] order
    pub fn as_array(&self) -> [f64; CLASS_COUNT] {
        [self.left, self.right, self.foot, self.tongue]
    }

    pub fn get(&self, label: ClassLabel) -> f64 {
        self.as_array()[label.index()]
    }
}

// ============================================================================
// PREDICTION RESULT
// ============================================================================

/// Output of one prediction call
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PredictionResult {
    /// `(label, probability)` in [`ClassLabel::ALL`] order
    pub(super) probabilities: [(ClassLabel, f64); CLASS_COUNT],
    pub(super) predicted: ClassLabel,
    pub(super) scores: ClassScores,
}

impl PredictionResult {
    pub fn probabilities(&self) -> &[(ClassLabel, f64); CLASS_COUNT] {
        &self.probabilities
    }

    /// Probability assigned to `label`
    pub fn probability(&self, label: ClassLabel) -> f64 {
        self.probabilities[label.index()].1
    }

    /// Most probable class (first in label order on ties)
    pub fn predicted(&self) -> ClassLabel {
        self.predicted
    }

    /// Raw scores the probabilities were derived from
    pub fn scores(&self) -> &ClassScores {
        &self.scores
    }

    /// Probabilities as whole percents, rounded half to even.
    ///
    /// These are display values and need not add up to 100.
    pub fn percentages(&self) -> [(ClassLabel, u32); CLASS_COUNT] {
        self.probabilities
            .map(|(label, p)| (label, (p * 100.0).round_ties_even() as u32))
    }
}
