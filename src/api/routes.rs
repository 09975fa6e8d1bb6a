//! HTTP route handlers for Axum.

use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    Json,
};

use crate::{
    api::types::{PredictRequest, PredictionDto},
    engine::encode::SymptomReport,
};

use super::AppState;

type ApiResult<T> = Result<Json<T>, (StatusCode, String)>;

/// Predict the most probable diseases for a set of reported symptoms.
///
/// A body that is not valid JSON, lacks the `symptoms` field, or carries a
/// non-numeric severity is rejected here with a 400; the engine only ever
/// sees well-formed reports.
pub async fn predict(
    State(state): State<AppState>,
    payload: Result<Json<PredictRequest>, JsonRejection>,
) -> ApiResult<Vec<PredictionDto>> {
    let Json(request) = payload.map_err(|rejection| {
        (
            StatusCode::BAD_REQUEST,
            format!("invalid input data: {}", rejection.body_text()),
        )
    })?;

    let reports: Vec<SymptomReport> = request
        .symptoms
        .into_iter()
        .map(SymptomReport::from)
        .collect();
    let top_n = request.top_n.unwrap_or(state.settings.default_top_n);

    let outcome = state.engine.predict(&reports, top_n);
    let rows = outcome
        .predictions
        .into_iter()
        .map(PredictionDto::from)
        .collect();
    Ok(Json(rows))
}
