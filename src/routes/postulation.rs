use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use serde_json::{Map, Value as JsonValue};
use validator::Validate;

use crate::{
    dto::postulation_dto::CreatePostulationPayload,
    error::Result,
    models::postulation::Postulation,
    utils::extract::{AppJson, AppPath},
    AppState,
};

#[utoipa::path(
    get,
    path = "/api/postulaciones",
    responses(
        (status = 200, description = "Latest 100 postulations, newest first", body = Json<Vec<Postulation>>),
        (status = 500, description = "Store error")
    )
)]
#[axum::debug_handler]
pub async fn list_postulations(State(state): State<AppState>) -> Result<impl IntoResponse> {
    let rows = state.postulation_service.list().await?;
    Ok(Json(rows))
}

#[utoipa::path(
    post,
    path = "/api/postulaciones",
    request_body = CreatePostulationPayload,
    responses(
        (status = 201, description = "Postulation created", body = Json<Postulation>),
        (status = 400, description = "Missing or invalid required fields"),
        (status = 500, description = "Store error")
    )
)]
#[axum::debug_handler]
pub async fn create_postulation(
    State(state): State<AppState>,
    AppJson(payload): AppJson<CreatePostulationPayload>,
) -> Result<impl IntoResponse> {
    payload.validate()?;
    let row = state.postulation_service.create(payload).await?;
    Ok((StatusCode::CREATED, Json(row)))
}

#[utoipa::path(
    patch,
    path = "/api/postulaciones/{id}",
    params(
        ("id" = i64, Path, description = "Postulation ID")
    ),
    request_body = Object,
    responses(
        (status = 200, description = "Postulation updated", body = Json<Postulation>),
        (status = 400, description = "Empty payload, unknown column or mistyped value"),
        (status = 404, description = "Postulation not found"),
        (status = 500, description = "Store error")
    )
)]
#[axum::debug_handler]
pub async fn update_postulation(
    State(state): State<AppState>,
    AppPath(id): AppPath<i64>,
    AppJson(fields): AppJson<Map<String, JsonValue>>,
) -> Result<impl IntoResponse> {
    let row = state.postulation_service.update(id, fields).await?;
    Ok(Json(row))
}
