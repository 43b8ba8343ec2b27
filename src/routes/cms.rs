use axum::{response::IntoResponse, Json};
use serde::Deserialize;
use serde_json::{Map, Value as JsonValue};

use crate::{
    cms::{collections, prepare::prepare, schema::Collection, Operation},
    error::{Error, Result},
    utils::extract::{AppJson, AppPath, AppQuery},
};

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct PrepareQuery {
    pub operation: Operation,
}

fn find_collection(slug: &str) -> Result<&'static Collection> {
    collections::find(slug).ok_or_else(|| Error::NotFound(format!("Collection {} not found", slug)))
}

#[utoipa::path(
    get,
    path = "/api/cms/collections",
    responses((status = 200, description = "Every CMS collection definition"))
)]
#[axum::debug_handler]
pub async fn list_collections() -> impl IntoResponse {
    Json(collections::ALL)
}

#[utoipa::path(
    get,
    path = "/api/cms/collections/{slug}",
    params(("slug" = String, Path, description = "Collection slug")),
    responses(
        (status = 200, description = "Collection definition"),
        (status = 404, description = "Unknown collection")
    )
)]
#[axum::debug_handler]
pub async fn get_collection(AppPath(slug): AppPath<String>) -> Result<impl IntoResponse> {
    Ok(Json(find_collection(&slug)?))
}

#[utoipa::path(
    post,
    path = "/api/cms/collections/{slug}/prepare",
    params(
        ("slug" = String, Path, description = "Collection slug"),
        ("operation" = Option<String>, Query, description = "create (default) or update")
    ),
    request_body = Object,
    responses(
        (status = 200, description = "Document with defaults and slug applied"),
        (status = 400, description = "Document failed field validation"),
        (status = 404, description = "Unknown collection")
    )
)]
#[axum::debug_handler]
pub async fn prepare_document(
    AppPath(slug): AppPath<String>,
    AppQuery(query): AppQuery<PrepareQuery>,
    AppJson(doc): AppJson<Map<String, JsonValue>>,
) -> Result<impl IntoResponse> {
    let collection = find_collection(&slug)?;
    let prepared = prepare(collection, query.operation, doc)?;
    Ok(Json(prepared))
}
