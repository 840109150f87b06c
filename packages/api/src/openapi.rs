use axum::Json;
use utoipa::OpenApi;

use crate::error::ErrorBody;
use crate::routes::health::HealthResponse;
use crate::routes::predict::{PredictRequest, PredictResponse};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Scribble Inference API",
        description = "Handwritten-digit recognition over a flattened 28x28 grayscale canvas"
    ),
    paths(
        crate::routes::health::health,
        crate::routes::predict::predict,
    ),
    components(schemas(HealthResponse, PredictRequest, PredictResponse, ErrorBody)),
    tags(
        (name = "health", description = "Liveness"),
        (name = "predict", description = "Digit classification")
    )
)]
pub struct ApiDoc;

pub async fn openapi_spec() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}
