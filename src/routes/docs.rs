use axum::{response::IntoResponse, Json};
use utoipa::OpenApi;

use super::{cms, db, health, notification, postulation, profile, seed, upload};

#[derive(OpenApi)]
#[openapi(
    paths(
        health::root,
        health::health,
        db::ping,
        db::tables,
        db::describe,
        upload::upload_cv,
        seed::seed,
        profile::list_profiles,
        profile::create_profile,
        profile::update_profile,
        postulation::list_postulations,
        postulation::create_postulation,
        postulation::update_postulation,
        notification::list_notifications,
        notification::create_notification,
        notification::update_notification,
        cms::list_collections,
        cms::get_collection,
        cms::prepare_document,
    ),
    info(title = "Bolsa Laboral API")
)]
pub struct ApiDoc;

#[axum::debug_handler]
pub async fn openapi_json() -> impl IntoResponse {
    Json(ApiDoc::openapi())
}
