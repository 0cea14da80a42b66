//! HTTP route handlers: health, generate_agreement, generate_block.

use std::collections::HashMap;

use axum::extract::{Path, Query};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde::Serialize;
use time::OffsetDateTime;

use accord_core::{generate_agreement, generate_block, Agreement, BlockName};

use super::json_error;

/// Success envelope for the full agreement. Serializing the struct keeps
/// the block keys in document order; a `json!` value would re-sort them.
#[derive(Serialize)]
struct AgreementResponse {
    status: &'static str,
    agreement: Agreement,
}

/// Build the in-band error envelope. Engine and input failures on the
/// generation routes travel as HTTP 200 with `"status": "error"` so that
/// callers only have to inspect the body.
fn status_error(message: &str) -> (StatusCode, Json<serde_json::Value>) {
    (
        StatusCode::OK,
        Json(serde_json::json!({
            "status": "error",
            "message": message,
        })),
    )
}

/// Fallback handler for unmatched routes.
pub(crate) async fn handle_not_found() -> impl IntoResponse {
    json_error(StatusCode::NOT_FOUND, "not found")
}

/// GET /health
pub(crate) async fn handle_health() -> impl IntoResponse {
    let response = serde_json::json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
    });
    (StatusCode::OK, Json(response))
}

/// POST /generate_agreement
///
/// Body: `{"user_prompt": "..."}`. Returns the full agreement keyed by
/// block name under `"agreement"`.
pub(crate) async fn handle_generate_agreement(
    Json(parsed): Json<serde_json::Value>,
) -> impl IntoResponse {
    let user_prompt = match parsed.get("user_prompt").and_then(|p| p.as_str()) {
        Some(prompt) => prompt,
        None => return status_error("user_prompt parameter is required").into_response(),
    };

    let today = OffsetDateTime::now_utc().date();
    match generate_agreement(user_prompt, today) {
        Ok(agreement) => {
            let response = AgreementResponse {
                status: "success",
                agreement,
            };
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(e) => status_error(&e.to_string()).into_response(),
    }
}

/// GET /generate_block/{block_name}?user_prompt=...
///
/// Returns one block body keyed by the requested name. The prompt check
/// runs before the name check, so a nonsense name with no prompt still
/// reports the missing prompt.
pub(crate) async fn handle_generate_block(
    Path(block_name): Path<String>,
    Query(params): Query<HashMap<String, String>>,
) -> impl IntoResponse {
    let user_prompt = match params.get("user_prompt").filter(|p| !p.is_empty()) {
        Some(prompt) => prompt,
        None => return status_error("user_prompt parameter is required").into_response(),
    };

    let name = match BlockName::from_key(&block_name) {
        Some(name) => name,
        None => {
            return (
                StatusCode::OK,
                Json(serde_json::json!({"error": "Invalid block name"})),
            )
                .into_response()
        }
    };

    let today = OffsetDateTime::now_utc().date();
    let body = generate_block(name, user_prompt, today);

    // The response key is the path segment as the caller wrote it.
    let mut response = serde_json::Map::new();
    response.insert(
        "status".to_string(),
        serde_json::Value::String("success".to_string()),
    );
    response.insert(block_name, serde_json::Value::String(body));
    (StatusCode::OK, Json(serde_json::Value::Object(response))).into_response()
}
