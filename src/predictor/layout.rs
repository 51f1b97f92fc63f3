//! Feature Layout - Centralized Input Definition
//!
//! Single source of truth for the five EEG channel statistics:
//! order, bounds, slider defaults and help text.
//!
//! The bounds here are enforced by the HTTP layer only. The predictor
//! accepts any value.

use serde::Serialize;

// ============================================================================
// BOUNDS
// ============================================================================

/// Lower bound for every channel mean (Fz, C3, Cz, C4)
pub const MEAN_MIN: f64 = -4.0;

/// Upper bound for every channel mean (Fz, C3, Cz, C4)
pub const MEAN_MAX: f64 = 4.0;

/// Lower bound for the frontal standard deviation
pub const STD_MIN: f64 = 0.2;

/// Upper bound for the frontal standard deviation
pub const STD_MAX: f64 = 3.0;

/// Slider increment
pub const SLIDER_STEP: f64 = 0.1;

// ============================================================================
// FEATURE LAYOUT (Authoritative source)
// ============================================================================

/// One input of the feature vector
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FeatureSpec {
    /// Field name in the JSON body
    pub name: &'static str,
    /// Human readable slider label
    pub label: &'static str,
    pub min: f64,
    pub max: f64,
    /// Initial slider position
    pub default: f64,
    pub step: f64,
    pub help: &'static str,
}

impl FeatureSpec {
    /// Whether `value` lies inside `[min, max]`. NaN is never in range.
    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }
}

/// Total number of features
pub const FEATURE_COUNT: usize = 5;

/// Inputs in the order the page lays them out
pub static FEATURE_LAYOUT: [FeatureSpec; FEATURE_COUNT] = [
    FeatureSpec {
        name: "fz_mean",
        label: "Fz_mean (−4 … +4)",
        min: MEAN_MIN,
        max: MEAN_MAX,
        default: 0.0,
        step: SLIDER_STEP,
        help: "Frontal mean amplitude",
    },
    FeatureSpec {
        name: "fz_std",
        label: "Fz_std (0.2 … 3.0)",
        min: STD_MIN,
        max: STD_MAX,
        default: 1.0,
        step: SLIDER_STEP,
        help: "Frontal variability (std)",
    },
    FeatureSpec {
        name: "c3_mean",
        label: "C3_mean (−4 … +4)",
        min: MEAN_MIN,
        max: MEAN_MAX,
        default: 0.0,
        step: SLIDER_STEP,
        help: "Left motor cortex mean",
    },
    FeatureSpec {
        name: "cz_mean",
        label: "Cz_mean (−4 … +4)",
        min: MEAN_MIN,
        max: MEAN_MAX,
        default: 0.0,
        step: SLIDER_STEP,
        help: "Central mean",
    },
    FeatureSpec {
        name: "c4_mean",
        label: "C4_mean (−4 … +4)",
        min: MEAN_MIN,
        max: MEAN_MAX,
        default: 0.0,
        step: SLIDER_STEP,
        help: "Right motor cortex mean",
    },
];

/// Get feature index by name
pub fn feature_index(name: &str) -> Option<usize> {
    FEATURE_LAYOUT.iter().position(|spec| spec.name == name)
}

/// Get feature spec by name
pub fn feature_spec(name: &str) -> Option<&'static FeatureSpec> {
    FEATURE_LAYOUT.iter().find(|spec| spec.name == name)
}

// ============================================================================
// LAYOUT INFO
// ============================================================================

/// Layout as served to the page
#[derive(Debug, Clone, Serialize)]
pub struct LayoutInfo {
    pub feature_count: usize,
    pub features: &'static [FeatureSpec],
}

impl LayoutInfo {
    pub fn current() -> Self {
        Self {
            feature_count: FEATURE_COUNT,
            features: &FEATURE_LAYOUT,
        }
    }
}
