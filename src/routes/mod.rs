pub mod cms;
pub mod db;
pub mod docs;
pub mod health;
pub mod notification;
pub mod postulation;
pub mod profile;
pub mod seed;
pub mod upload;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, patch, post},
    Router,
};

use crate::AppState;

/// Everything served under `/api`.
pub fn api_router() -> Router<AppState> {
    Router::new()
        .route("/health", get(health::health))
        .route("/db/ping", get(db::ping))
        .route("/db/tables", get(db::tables))
        .route("/db/describe", get(db::describe))
        .route(
            "/upload/cv",
            post(upload::upload_cv).layer(DefaultBodyLimit::max(upload::CV_MAX_BYTES)),
        )
        .route("/seed", post(seed::seed))
        .route(
            "/perfiles",
            get(profile::list_profiles).post(profile::create_profile),
        )
        .route("/perfiles/:id", patch(profile::update_profile))
        .route(
            "/postulaciones",
            get(postulation::list_postulations).post(postulation::create_postulation),
        )
        .route("/postulaciones/:id", patch(postulation::update_postulation))
        .route(
            "/notificaciones",
            get(notification::list_notifications).post(notification::create_notification),
        )
        .route(
            "/notificaciones/:id",
            patch(notification::update_notification),
        )
        .route("/cms/collections", get(cms::list_collections))
        .route("/cms/collections/:slug", get(cms::get_collection))
        .route(
            "/cms/collections/:slug/prepare",
            post(cms::prepare_document),
        )
        .route("/openapi.json", get(docs::openapi_json))
}
