#[global_allocator]
static GLOBAL: mimalloc::MiMalloc = mimalloc::MiMalloc;

use axum::Router;
use scribble_api::{construct_router, state::State};
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod config;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    tracing::info!("Starting Scribble Inference Service");

    let config = config::Config::from_env()?;

    // A missing or broken artifact must not take the service down: liveness
    // stays up and inference answers with the model-unavailable error.
    let classifier = match scribble_model::load(&config.model_path) {
        Ok(model) => {
            tracing::info!(
                "Loaded classifier from {}: {}",
                config.model_path.display(),
                model
            );
            Some(model)
        }
        Err(err) => {
            tracing::error!(
                "Error loading model from {}: {}",
                config.model_path.display(),
                err
            );
            None
        }
    };

    let state = Arc::new(State::new(classifier, config.gate.clone()));

    let app = Router::new().merge(construct_router(state));

    let addr = format!("0.0.0.0:{}", config.port);
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
