use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use std::sync::Arc;

use crate::provider::{NumberSource, SourceKey};
use crate::window::WindowStore;

/// Shared state for the numbers API
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<WindowStore>,
    pub source: Arc<dyn NumberSource>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NumbersResponse {
    pub window_prev_state: Vec<i64>,
    pub window_curr_state: Vec<i64>,
    pub fetched_numbers: Vec<i64>,
    pub average: String,
}

/// GET /numbers/:source_key
pub async fn get_numbers(
    State(state): State<AppState>,
    Path(source_key): Path<String>,
) -> Result<Json<NumbersResponse>, ApiError> {
    let key = SourceKey::parse(&source_key).ok_or(ApiError::InvalidNumberId)?;

    // Fetch completes before the window lock is taken; a failed fetch must
    // leave the window exactly as it was.
    let candidates = state.source.fetch(key).await.map_err(|e| {
        tracing::error!(source_key = %source_key, error = %e, "Source fetch failed");
        ApiError::FetchFailed
    })?;

    let outcome = state.store.apply(&candidates).await;

    tracing::debug!(
        source_key = %source_key,
        admitted = outcome.admitted.len(),
        window_len = outcome.curr_state.len(),
        "Window updated"
    );

    Ok(Json(NumbersResponse {
        window_prev_state: outcome.prev_state,
        window_curr_state: outcome.curr_state,
        fetched_numbers: outcome.admitted,
        // Two-decimal rendering happens here only; the outcome keeps full
        // precision.
        average: format!("{:.2}", outcome.average),
    }))
}

pub async fn health_check() -> &'static str {
    "OK"
}

// Error handling
#[derive(Debug)]
pub enum ApiError {
    InvalidNumberId,
    FetchFailed,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        // Fixed messages; internal detail stays in the logs.
        let (status, message) = match self {
            ApiError::InvalidNumberId => (StatusCode::BAD_REQUEST, "Invalid number ID"),
            ApiError::FetchFailed => (StatusCode::INTERNAL_SERVER_ERROR, "Error fetching numbers"),
        };

        (status, Json(serde_json::json!({ "error": message }))).into_response()
    }
}
