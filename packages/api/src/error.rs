use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use utoipa::ToSchema;

/// Closed set of outcomes a prediction request can fail with. Every variant
/// is terminal for its request; nothing is retried. The messages are part of
/// the external contract and must stay stable.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    #[error("Model not loaded")]
    ModelUnavailable,
    #[error("Invalid input. 'image' field is required.")]
    MissingField,
    #[error("Invalid input. Expected a flattened array of 784 pixel values.")]
    InvalidShape,
    #[error("Image is required. It cannot be empty.")]
    EmptyImage,
    #[error("This does not appear to be a handwritten number.")]
    NotADigit,
    #[error("{0}")]
    Internal(String),
}

/// Flat error envelope, serialized as `{"error": "<message>"}`.
#[derive(Serialize, Deserialize, ToSchema)]
pub struct ErrorBody {
    pub error: String,
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::ModelUnavailable | ApiError::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
            ApiError::MissingField
            | ApiError::InvalidShape
            | ApiError::EmptyImage
            | ApiError::NotADigit => StatusCode::BAD_REQUEST,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let message = self.to_string();

        if status.is_server_error() {
            tracing::error!("Request failed: {}", message);
        } else {
            tracing::warn!("Rejected request: {}", message);
        }

        (status, Json(ErrorBody { error: message })).into_response()
    }
}

impl From<scribble_model::ModelError> for ApiError {
    fn from(err: scribble_model::ModelError) -> Self {
        ApiError::Internal(err.to_string())
    }
}
