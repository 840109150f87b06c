use std::time::Duration;

use axum::{Router, routing::get};
use tower_http::cors::CorsLayer;
use tower_http::timeout::TimeoutLayer;

pub mod error;
pub mod gate;
pub mod openapi;
pub mod routes;
pub mod state;

pub use axum;

use state::AppState;

/// Browser canvases post from arbitrary origins, so the `/api` subtree is
/// fully open. The timeout bounds a request should the classifier ever
/// misbehave.
pub fn construct_router(state: AppState) -> Router {
    let api = Router::new()
        .merge(routes::predict::routes())
        .merge(routes::health::routes())
        .route("/openapi.json", get(openapi::openapi_spec))
        .with_state(state)
        .layer(CorsLayer::permissive())
        .layer(TimeoutLayer::new(Duration::from_secs(30)));

    Router::new().route("/", get(home)).nest("/api", api)
}

#[tracing::instrument(name = "GET /")]
async fn home() -> &'static str {
    "Scribble inference service is running!"
}
