use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use serde_json::{Map, Value as JsonValue};
use validator::Validate;

use crate::{
    dto::notification_dto::CreateNotificationPayload,
    error::Result,
    models::notification::Notification,
    utils::extract::{AppJson, AppPath},
    AppState,
};

#[utoipa::path(
    get,
    path = "/api/notificaciones",
    responses(
        (status = 200, description = "Latest 100 notifications, newest first", body = Json<Vec<Notification>>),
        (status = 500, description = "Store error")
    )
)]
#[axum::debug_handler]
pub async fn list_notifications(State(state): State<AppState>) -> Result<impl IntoResponse> {
    let rows = state.notification_service.list().await?;
    Ok(Json(rows))
}

#[utoipa::path(
    post,
    path = "/api/notificaciones",
    request_body = CreateNotificationPayload,
    responses(
        (status = 201, description = "Notification created", body = Json<Notification>),
        (status = 400, description = "Missing or invalid required fields"),
        (status = 500, description = "Store error")
    )
)]
#[axum::debug_handler]
pub async fn create_notification(
    State(state): State<AppState>,
    AppJson(payload): AppJson<CreateNotificationPayload>,
) -> Result<impl IntoResponse> {
    payload.validate()?;
    let row = state.notification_service.create(payload).await?;
    Ok((StatusCode::CREATED, Json(row)))
}

#[utoipa::path(
    patch,
    path = "/api/notificaciones/{id}",
    params(
        ("id" = i64, Path, description = "Notification ID")
    ),
    request_body = Object,
    responses(
        (status = 200, description = "Notification updated", body = Json<Notification>),
        (status = 400, description = "Empty payload, unknown column or mistyped value"),
        (status = 404, description = "Notification not found"),
        (status = 500, description = "Store error")
    )
)]
#[axum::debug_handler]
pub async fn update_notification(
    State(state): State<AppState>,
    AppPath(id): AppPath<i64>,
    AppJson(fields): AppJson<Map<String, JsonValue>>,
) -> Result<impl IntoResponse> {
    let row = state.notification_service.update(id, fields).await?;
    Ok(Json(row))
}
