use axum::{extract::State, response::IntoResponse, Json};
use serde_json::json;

use crate::{error::Result, AppState};

#[utoipa::path(
    post,
    path = "/api/seed",
    responses(
        (status = 200, description = "Demo data inserted in one transaction"),
        (status = 500, description = "Seed failed and was rolled back")
    )
)]
#[axum::debug_handler]
pub async fn seed(State(state): State<AppState>) -> Result<impl IntoResponse> {
    state.seed_service.run().await?;
    Ok(Json(json!({ "ok": true })))
}
