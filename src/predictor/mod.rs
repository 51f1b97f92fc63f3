//! Predictor Module
//!
//! Heuristic EEG motor-imagery predictor: four linear scores over five
//! channel statistics, normalized with a stable softmax.
//!
//! ## Structure
//! - `types`: FeatureVector, ClassLabel, ClassScores, PredictionResult
//! - `layout`: input order, bounds and slider defaults
//! - `weights`: scoring coefficients
//! - `scoring`: linear class scores
//! - `softmax`: normalization and argmax
//! - `classifier`: `predict` entry point
//!
//! ## Usage
//! ```ignore
//! use crate::predictor::{predict, FeatureVector};
//!
//! let result = predict(&FeatureVector::new(0.0, 1.0, 4.0, 0.0, -4.0));
//! assert_eq!(result.predicted(), ClassLabel::Left);
//! ```

pub mod types;
pub mod layout;
pub mod weights;
pub mod scoring;
pub mod softmax;
pub mod classifier;

#[cfg(test)]
mod tests;

pub use types::{
    FeatureVector,
    ClassLabel,
    ClassVisual,
    ClassScores,
    PredictionResult,
    CLASS_COUNT,
};

pub use layout::{LayoutInfo, FEATURE_LAYOUT, FEATURE_COUNT};

pub use classifier::predict;
