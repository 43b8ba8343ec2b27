use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use serde_json::json;

use crate::AppState;

#[utoipa::path(
    get,
    path = "/",
    responses((status = 200, description = "Service banner", body = String))
)]
#[axum::debug_handler]
pub async fn root() -> &'static str {
    "API backend corriendo ✅"
}

#[utoipa::path(
    get,
    path = "/api/health",
    responses((status = 200, description = "Service is up; uptime in seconds"))
)]
#[axum::debug_handler]
pub async fn health(State(state): State<AppState>) -> impl IntoResponse {
    let body = json!({
        "status": "ok",
        "uptime": state.started_at.elapsed().as_secs_f64(),
    });
    (StatusCode::OK, Json(body))
}
