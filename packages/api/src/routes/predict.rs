use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use axum::{Json, Router, routing::post};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use utoipa::ToSchema;

use crate::error::ApiError;
use crate::gate::{self, PIXELS, RejectReason, Verdict};
use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new().route("/predict", post(predict))
}

/// Documented request shape. The handler inspects the raw payload instead of
/// deserializing into this struct so that a missing field, a wrong shape and
/// a malformed body each keep their own distinct error.
#[derive(Serialize, Deserialize, ToSchema)]
pub struct PredictRequest {
    /// Row-major flattened 28x28 grayscale image, values in [0, 255].
    pub image: Vec<f64>,
}

#[derive(Serialize, Deserialize, ToSchema)]
pub struct PredictResponse {
    /// Predicted digit class, 0 through 9.
    pub prediction: usize,
}

#[utoipa::path(
    post,
    path = "/api/predict",
    tag = "predict",
    request_body = PredictRequest,
    responses(
        (status = 200, description = "Predicted digit class", body = PredictResponse),
        (status = 400, description = "Payload failed validation or the gate", body = crate::error::ErrorBody),
        (status = 500, description = "Classifier unavailable or inference failed", body = crate::error::ErrorBody)
    )
)]
#[tracing::instrument(name = "POST /api/predict", skip(state, payload))]
pub async fn predict(
    State(state): State<AppState>,
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<Json<PredictResponse>, ApiError> {
    // The model check comes first so a broken deployment answers the same
    // way no matter what the caller sends.
    let classifier = state
        .classifier
        .as_ref()
        .ok_or(ApiError::ModelUnavailable)?;

    let Json(payload) = payload.map_err(|rejection| ApiError::Internal(rejection.body_text()))?;
    let pixels = extract_pixels(&payload)?;

    match gate::evaluate(&pixels, &state.gate) {
        Verdict::Rejected(RejectReason::EmptyCanvas) => Err(ApiError::EmptyImage),
        Verdict::Rejected(RejectReason::NotADigit) => Err(ApiError::NotADigit),
        Verdict::Accepted => {
            let label = classifier.predict(&pixels)?;
            Ok(Json(PredictResponse { prediction: label }))
        }
    }
}

/// Structural validation: the payload must be an object carrying an `image`
/// array of exactly [`PIXELS`] numeric entries.
fn extract_pixels(payload: &Value) -> Result<Vec<f64>, ApiError> {
    let image = payload
        .as_object()
        .and_then(|object| object.get("image"))
        .ok_or(ApiError::MissingField)?;

    let entries = image.as_array().ok_or(ApiError::InvalidShape)?;
    if entries.len() != PIXELS {
        return Err(ApiError::InvalidShape);
    }

    entries
        .iter()
        .map(|entry| entry.as_f64().ok_or(ApiError::InvalidShape))
        .collect()
}
