use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use serde_json::{Map, Value as JsonValue};
use validator::Validate;

use crate::{
    dto::profile_dto::CreateProfilePayload,
    error::Result,
    models::profile::Profile,
    utils::extract::{AppJson, AppPath},
    AppState,
};

#[utoipa::path(
    get,
    path = "/api/perfiles",
    responses(
        (status = 200, description = "Latest 100 profiles, newest first", body = Json<Vec<Profile>>),
        (status = 500, description = "Store error")
    )
)]
#[axum::debug_handler]
pub async fn list_profiles(State(state): State<AppState>) -> Result<impl IntoResponse> {
    let rows = state.profile_service.list().await?;
    Ok(Json(rows))
}

#[utoipa::path(
    post,
    path = "/api/perfiles",
    request_body = CreateProfilePayload,
    responses(
        (status = 201, description = "Profile created", body = Json<Profile>),
        (status = 400, description = "Missing or invalid required fields"),
        (status = 500, description = "Store error")
    )
)]
#[axum::debug_handler]
pub async fn create_profile(
    State(state): State<AppState>,
    AppJson(payload): AppJson<CreateProfilePayload>,
) -> Result<impl IntoResponse> {
    payload.validate()?;
    let row = state.profile_service.create(payload).await?;
    Ok((StatusCode::CREATED, Json(row)))
}

#[utoipa::path(
    patch,
    path = "/api/perfiles/{id}",
    params(
        ("id" = i64, Path, description = "Profile ID")
    ),
    request_body = Object,
    responses(
        (status = 200, description = "Profile updated", body = Json<Profile>),
        (status = 400, description = "Empty payload, unknown column or mistyped value"),
        (status = 404, description = "Profile not found"),
        (status = 500, description = "Store error")
    )
)]
#[axum::debug_handler]
pub async fn update_profile(
    State(state): State<AppState>,
    AppPath(id): AppPath<i64>,
    AppJson(fields): AppJson<Map<String, JsonValue>>,
) -> Result<impl IntoResponse> {
    let row = state.profile_service.update(id, fields).await?;
    Ok(Json(row))
}
