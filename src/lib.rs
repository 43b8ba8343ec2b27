pub mod cms;
pub mod config;
pub mod database;
pub mod dto;
pub mod error;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod services;
pub mod utils;

use std::sync::Arc;
use std::time::Instant;

use axum::{routing::get, Router};
use sqlx::PgPool;
use tower_http::{catch_panic::CatchPanicLayer, trace::TraceLayer};

use crate::config::Config;
use crate::error::Result;
use crate::services::{
    notification_service::NotificationService,
    postulation_service::PostulationService,
    profile_service::ProfileService,
    seed_service::SeedService,
    upload_service::{CloudinaryStorage, ObjectStorage, UnconfiguredStorage},
};

#[derive(Clone)]
pub struct AppState {
    pub pool: PgPool,
    pub profile_service: ProfileService,
    pub postulation_service: PostulationService,
    pub notification_service: NotificationService,
    pub seed_service: SeedService,
    pub storage: Arc<dyn ObjectStorage>,
    pub started_at: Instant,
}

impl AppState {
    pub fn new(pool: PgPool, config: &Config) -> Result<Self> {
        let storage: Arc<dyn ObjectStorage> = match &config.cloudinary {
            Some(cloudinary) => Arc::new(CloudinaryStorage::new(cloudinary.clone())?),
            None => {
                tracing::warn!("Cloudinary credentials missing; CV uploads will fail");
                Arc::new(UnconfiguredStorage)
            }
        };
        Ok(Self::with_storage(pool, storage))
    }

    pub fn with_storage(pool: PgPool, storage: Arc<dyn ObjectStorage>) -> Self {
        Self {
            profile_service: ProfileService::new(pool.clone()),
            postulation_service: PostulationService::new(pool.clone()),
            notification_service: NotificationService::new(pool.clone()),
            seed_service: SeedService::new(pool.clone()),
            pool,
            storage,
            started_at: Instant::now(),
        }
    }
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(routes::health::root))
        .nest("/api", routes::api_router())
        .fallback(middleware::errors::not_found)
        .with_state(state)
        .layer(CatchPanicLayer::custom(middleware::errors::handle_panic))
        .layer(TraceLayer::new_for_http())
        .layer(middleware::cors::permissive_cors())
}
