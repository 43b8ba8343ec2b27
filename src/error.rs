use axum::{
    extract::rejection::{JsonRejection, PathRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Json},
};
use serde_json::json;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Validation error: {0}")]
    Validation(#[from] validator::ValidationErrors),

    #[error("Seed failed: {0}")]
    Seed(String),

    #[error("Upstream error: {0}")]
    Upstream(String),

    #[error("HTTP error: {0}")]
    Reqwest(#[from] reqwest::Error),

    #[error("Invalid JSON body: {0}")]
    JsonBody(#[from] JsonRejection),

    #[error("Invalid query string: {0}")]
    Query(#[from] QueryRejection),

    #[error("Invalid path parameter: {0}")]
    Path(#[from] PathRejection),

    #[error("Request rejected ({0}): {1}")]
    Rejected(StatusCode, String),

    #[error("Multipart error: {0}")]
    Multipart(#[from] axum::extract::multipart::MultipartError),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl Error {
    fn status_and_body(&self) -> (StatusCode, String, Option<String>) {
        match self {
            Error::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg.clone(), None),
            Error::NotFound(msg) => (StatusCode::NOT_FOUND, msg.clone(), None),
            Error::Validation(err) => (
                StatusCode::BAD_REQUEST,
                "Validation failed".to_string(),
                Some(err.to_string()),
            ),
            Error::JsonBody(err) => (
                StatusCode::BAD_REQUEST,
                "Invalid JSON body".to_string(),
                Some(err.body_text()),
            ),
            Error::Query(err) => (
                StatusCode::BAD_REQUEST,
                "Invalid query string".to_string(),
                Some(err.body_text()),
            ),
            Error::Path(err) => (
                StatusCode::BAD_REQUEST,
                "Invalid path parameter".to_string(),
                Some(err.body_text()),
            ),
            Error::Rejected(status, msg) => (*status, msg.clone(), None),
            Error::Multipart(err) => (
                err.status(),
                "Invalid multipart body".to_string(),
                Some(err.body_text()),
            ),
            Error::Database(err) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Database error".to_string(),
                Some(err.to_string()),
            ),
            Error::Seed(detail) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Seed failed".to_string(),
                Some(detail.clone()),
            ),
            Error::Upstream(msg) => (
                StatusCode::BAD_GATEWAY,
                "Upstream storage error".to_string(),
                Some(msg.clone()),
            ),
            Error::Reqwest(err) => (
                StatusCode::BAD_GATEWAY,
                "Upstream storage error".to_string(),
                Some(err.to_string()),
            ),
            Error::Config(msg) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Service misconfigured".to_string(),
                Some(msg.clone()),
            ),
            Error::Internal(msg) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Internal Server Error".to_string(),
                Some(msg.clone()),
            ),
        }
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> axum::response::Response {
        let (status, error, detail) = self.status_and_body();

        if status.is_server_error() {
            tracing::error!(error = %self, "request failed");
        }

        let body = match detail {
            Some(detail) => json!({ "error": error, "detail": detail }),
            None => json!({ "error": error }),
        };
        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bad_request_has_no_detail() {
        let (status, error, detail) =
            Error::BadRequest("No fields provided".into()).status_and_body();
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(error, "No fields provided");
        assert!(detail.is_none());
    }

    #[test]
    fn storage_failures_carry_the_driver_message() {
        let (status, error, detail) = Error::Database(sqlx::Error::PoolTimedOut).status_and_body();
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(error, "Database error");
        assert!(detail.is_some());
    }

    #[test]
    fn seed_failures_keep_the_failing_step() {
        let (status, error, detail) =
            Error::Seed("postulaciones (oferta 101): boom".into()).status_and_body();
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(error, "Seed failed");
        assert_eq!(detail.as_deref(), Some("postulaciones (oferta 101): boom"));
    }

    #[test]
    fn upstream_failures_map_to_bad_gateway() {
        let (status, _, detail) = Error::Upstream("cloudinary said no".into()).status_and_body();
        assert_eq!(status, StatusCode::BAD_GATEWAY);
        assert_eq!(detail.as_deref(), Some("cloudinary said no"));
    }
}
