//! Prediction handlers

use axum::{extract::{rejection::JsonRejection, State}, Json};
use validator::Validate;

use crate::{AppState, AppResult};
use crate::models::{PredictRequest, PredictResponse};
use crate::predictor::{predict, FeatureVector};

/// Run a prediction for the posted slider values
pub async fn create(
    State(state): State<AppState>,
    payload: Result<Json<PredictRequest>, JsonRejection>,
) -> AppResult<Json<PredictResponse>> {
    let Json(req) = payload?;
    req.validate()?;

    // Cosmetic pause so the page's loading overlay has time to play
    if !state.config.predict_delay.is_zero() {
        tokio::time::sleep(state.config.predict_delay).await;
    }

    Ok(Json(run(req.into())))
}

/// Prediction for the initial slider position
pub async fn default() -> Json<PredictResponse> {
    Json(run(FeatureVector::default()))
}

fn run(features: FeatureVector) -> PredictResponse {
    let result = predict(&features);
    let predicted = result.predicted();

    tracing::debug!(
        "Predicted {} (p={:.4}) for {:?}",
        predicted,
        result.probability(predicted),
        features
    );

    PredictResponse::new(features, &result)
}
