//! `accord serve` -- HTTP JSON API server for the agreement engine.
//!
//! Exposes the extraction and templating pipeline as an async HTTP
//! service using `axum` + `tokio`. Supports concurrent request handling;
//! every request builds its agreement from scratch, so nothing is shared
//! between requests.
//!
//! Endpoints:
//! - GET  /health                      - Server status
//! - POST /generate_agreement         - Full eleven-block agreement
//! - GET  /generate_block/{block_name} - A single block body
//!
//! All responses use Content-Type: application/json. Engine failures are
//! reported in-band as HTTP 200 envelopes with `"status": "error"`.

mod handlers;

use axum::extract::DefaultBodyLimit;
use axum::http::{Method, StatusCode};
use axum::response::IntoResponse;
use axum::routing::{get, post};
use axum::{Json, Router};
use tower_http::cors::{Any, CorsLayer};

use handlers::{
    handle_generate_agreement, handle_generate_block, handle_health, handle_not_found,
};

/// Maximum request body size (1 MB).
const MAX_BODY_SIZE: usize = 1024 * 1024;

/// Build a JSON error response with the given status code.
fn json_error(status: StatusCode, message: &str) -> impl IntoResponse {
    (status, Json(serde_json::json!({"error": message})))
}

/// Start the HTTP server on the given port. Blocks until shutdown.
pub async fn start_server(port: u16) -> Result<(), Box<dyn std::error::Error>> {
    // Permissive CORS for local development
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST])
        .allow_headers(Any);

    let app = Router::new()
        .route("/health", get(handle_health))
        .route("/generate_agreement", post(handle_generate_agreement))
        .route("/generate_block/{block_name}", get(handle_generate_block))
        .fallback(handle_not_found)
        .layer(cors)
        .layer(DefaultBodyLimit::max(MAX_BODY_SIZE));

    let addr = format!("0.0.0.0:{}", port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    eprintln!("Accord agreement API listening on http://0.0.0.0:{}", port);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    eprintln!("\nServer shut down.");
    Ok(())
}

/// Wait for Ctrl+C.
async fn shutdown_signal() {
    tokio::signal::ctrl_c()
        .await
        .expect("failed to install Ctrl+C handler");
    eprintln!("\nReceived shutdown signal...");
}
