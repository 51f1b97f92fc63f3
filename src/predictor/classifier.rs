//! Motor Imagery Classifier
//!
//! Only the prediction step - no types, no constants.
//! Input: FeatureVector
//! Output: PredictionResult

use super::scoring::score;
use super::softmax::{argmax, softmax};
use super::types::{ClassLabel, FeatureVector, PredictionResult};

/// Map five channel statistics to a probability distribution over
/// Left / Right / Foot / Tongue.
///
/// Pure and deterministic: the same input always gives the same output.
/// Never fails; non-finite input yields non-finite probabilities.
pub fn predict(features: &FeatureVector) -> PredictionResult {
    let scores = score(features);
    let probs = softmax(&scores.as_array());
    let predicted = ClassLabel::ALL[argmax(&probs)];

    PredictionResult {
        probabilities: ClassLabel::ALL.map(|label| (label, probs[label.index()])),
        predicted,
        scores,
    }
}
