//! Feature layout handler

use axum::Json;

use crate::predictor::LayoutInfo;

/// Slider definitions the page builds its inputs from
pub async fn layout() -> Json<LayoutInfo> {
    Json(LayoutInfo::current())
}
