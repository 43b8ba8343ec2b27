use axum::{extract::State, response::IntoResponse, Json};

use crate::{
    database::introspect,
    dto::db_dto::{DescribeQuery, DescribeResponse, PingResponse, TablesResponse},
    error::{Error, Result},
    utils::extract::AppQuery,
    AppState,
};

#[utoipa::path(
    get,
    path = "/api/db/ping",
    responses(
        (status = 200, description = "Store reachable", body = Json<PingResponse>),
        (status = 500, description = "Store unreachable")
    )
)]
#[axum::debug_handler]
pub async fn ping(State(state): State<AppState>) -> Result<impl IntoResponse> {
    let db = introspect::ping(&state.pool).await?;
    Ok(Json(PingResponse { status: "ok", db }))
}

#[utoipa::path(
    get,
    path = "/api/db/tables",
    responses(
        (status = 200, description = "Base tables outside the system schemas", body = Json<TablesResponse>),
        (status = 500, description = "Store error")
    )
)]
#[axum::debug_handler]
pub async fn tables(State(state): State<AppState>) -> Result<impl IntoResponse> {
    let tables = introspect::list_tables(&state.pool).await?;
    Ok(Json(TablesResponse { tables }))
}

#[utoipa::path(
    get,
    path = "/api/db/describe",
    params(
        ("table" = String, Query, description = "Table name"),
        ("schema" = Option<String>, Query, description = "Schema name, defaults to public")
    ),
    responses(
        (status = 200, description = "Column metadata in ordinal order", body = Json<DescribeResponse>),
        (status = 400, description = "Missing table parameter"),
        (status = 500, description = "Store error")
    )
)]
#[axum::debug_handler]
pub async fn describe(
    State(state): State<AppState>,
    AppQuery(query): AppQuery<DescribeQuery>,
) -> Result<impl IntoResponse> {
    let table = query
        .table
        .filter(|t| !t.is_empty())
        .ok_or_else(|| Error::BadRequest("Missing query param \"table\"".to_string()))?;
    let schema = query
        .schema
        .filter(|s| !s.is_empty())
        .unwrap_or_else(|| "public".to_string());

    let columns = introspect::describe_table(&state.pool, &schema, &table).await?;
    Ok(Json(DescribeResponse {
        schema,
        table,
        columns,
    }))
}
