pub mod error;
pub mod models;
pub mod routes;
pub mod services;

use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};
use study_core::TextGenerator;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::services::openai::OpenAiGenerator;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    /// Injected generation capability; tests swap in scripted doubles.
    pub generator: Arc<dyn TextGenerator>,
}

/// Build the router over the given state.
pub fn app(state: AppState) -> Router {
    Router::new()
        .route("/health", get(|| async { "OK" }))
        .route("/api/summary", post(routes::summary::generate))
        .route("/api/flashcards", post(routes::flashcards::generate))
        .route("/api/ask", post(routes::ask::ask))
        .route("/api/slides", post(routes::slides::plan))
        .route("/api/quiz/check", post(routes::quiz::check))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

pub async fn run() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let generator = OpenAiGenerator::from_env()?;
    let state = AppState {
        generator: Arc::new(generator),
    };

    let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
    let port = std::env::var("PORT").unwrap_or_else(|_| "3000".to_string());
    let addr = format!("{host}:{port}");

    tracing::info!("Listening on {addr}");
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app(state)).await?;

    Ok(())
}
