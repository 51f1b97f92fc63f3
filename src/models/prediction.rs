//! Prediction request/response model

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::predictor::layout::{MEAN_MAX, MEAN_MIN, STD_MAX, STD_MIN};
use crate::predictor::{ClassLabel, ClassScores, ClassVisual, FeatureVector, PredictionResult};

/// Slider values posted by the page
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct PredictRequest {
    #[validate(range(min = MEAN_MIN, max = MEAN_MAX))]
    pub fz_mean: f64,
    #[validate(range(min = STD_MIN, max = STD_MAX))]
    pub fz_std: f64,
    #[validate(range(min = MEAN_MIN, max = MEAN_MAX))]
    pub c3_mean: f64,
    #[validate(range(min = MEAN_MIN, max = MEAN_MAX))]
    pub cz_mean: f64,
    #[validate(range(min = MEAN_MIN, max = MEAN_MAX))]
    pub c4_mean: f64,
}

impl From<PredictRequest> for FeatureVector {
    fn from(req: PredictRequest) -> Self {
        FeatureVector::new(req.fz_mean, req.fz_std, req.c3_mean, req.cz_mean, req.c4_mean)
    }
}

#[derive(Debug, Serialize)]
pub struct ClassProbability {
    pub label: ClassLabel,
    pub probability: f64,
    /// Rounded whole percent, as drawn on the bar
    pub percent: u32,
}

#[derive(Debug, Serialize)]
pub struct PredictResponse {
    pub prediction: ClassLabel,
    pub probabilities: Vec<ClassProbability>,
    pub scores: ClassScores,
    pub visual: ClassVisual,
    pub features: FeatureVector,
    pub server_time: i64,
}

impl PredictResponse {
    pub fn new(features: FeatureVector, result: &PredictionResult) -> Self {
        let probabilities = result
            .probabilities()
            .iter()
            .zip(result.percentages())
            .map(|(&(label, probability), (_, percent))| ClassProbability {
                label,
                probability,
                percent,
            })
            .collect();

        Self {
            prediction: result.predicted(),
            probabilities,
            scores: *result.scores(),
            visual: result.predicted().visual(),
            features,
            server_time: chrono::Utc::now().timestamp(),
        }
    }
}
