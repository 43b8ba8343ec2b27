//! Parameterized single-row UPDATE built from a partial JSON payload.
//!
//! Column names only ever come from a table's static [`TableSchema`]; request
//! keys are used for lookup and never reach the SQL text. Values are always
//! bound as positional parameters, and the row id is the last one.

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde_json::{Map, Value as JsonValue};
use sqlx::{
    postgres::{PgArguments, PgRow},
    query::QueryAs,
    FromRow, PgPool, Postgres,
};
use std::str::FromStr;

use crate::error::{Error, Result};
use crate::utils::time::from_rfc3339;

/// SQL type family of a writable column, used to coerce JSON values before binding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnKind {
    Text,
    Int,
    BigInt,
    Numeric,
    Bool,
    Date,
    Timestamp,
    Json,
}

impl ColumnKind {
    fn describe(self) -> &'static str {
        match self {
            ColumnKind::Text => "a string",
            ColumnKind::Int => "a 32-bit integer",
            ColumnKind::BigInt => "an integer",
            ColumnKind::Numeric => "a number",
            ColumnKind::Bool => "a boolean",
            ColumnKind::Date => "a date (YYYY-MM-DD)",
            ColumnKind::Timestamp => "an RFC 3339 timestamp",
            ColumnKind::Json => "a JSON value",
        }
    }
}

#[derive(Debug)]
pub struct Column {
    pub name: &'static str,
    pub kind: ColumnKind,
}

impl Column {
    pub const fn new(name: &'static str, kind: ColumnKind) -> Self {
        Self { name, kind }
    }
}

/// A table and the columns a partial update may write.
#[derive(Debug)]
pub struct TableSchema {
    pub name: &'static str,
    pub writable: &'static [Column],
}

impl TableSchema {
    pub fn column(&self, name: &str) -> Option<&'static Column> {
        self.writable.iter().find(|c| c.name == name)
    }
}

/// A row type backed by a [`TableSchema`] with a `BIGINT id` primary key.
pub trait Entity: for<'r> FromRow<'r, PgRow> + Send + Unpin {
    const SCHEMA: &'static TableSchema;
    /// Human-readable name used in not-found messages.
    const LABEL: &'static str;
}

#[derive(Debug, Clone, PartialEq)]
pub enum BindValue {
    Text(Option<String>),
    Int(Option<i32>),
    BigInt(Option<i64>),
    Numeric(Option<Decimal>),
    Bool(Option<bool>),
    Date(Option<NaiveDate>),
    Timestamp(Option<DateTime<Utc>>),
    Json(Option<JsonValue>),
}

impl BindValue {
    /// JSON `null` becomes SQL `NULL` for every kind.
    pub fn coerce(column: &Column, value: JsonValue) -> Result<Self> {
        let mismatch = || {
            Error::BadRequest(format!(
                "Field '{}' expects {}",
                column.name,
                column.kind.describe()
            ))
        };

        if value.is_null() {
            return Ok(match column.kind {
                ColumnKind::Text => BindValue::Text(None),
                ColumnKind::Int => BindValue::Int(None),
                ColumnKind::BigInt => BindValue::BigInt(None),
                ColumnKind::Numeric => BindValue::Numeric(None),
                ColumnKind::Bool => BindValue::Bool(None),
                ColumnKind::Date => BindValue::Date(None),
                ColumnKind::Timestamp => BindValue::Timestamp(None),
                ColumnKind::Json => BindValue::Json(None),
            });
        }

        let bound = match (column.kind, value) {
            (ColumnKind::Text, JsonValue::String(s)) => BindValue::Text(Some(s)),
            (ColumnKind::Int, JsonValue::Number(n)) => {
                let n = n.as_i64().and_then(|n| i32::try_from(n).ok()).ok_or_else(mismatch)?;
                BindValue::Int(Some(n))
            }
            (ColumnKind::BigInt, JsonValue::Number(n)) => {
                BindValue::BigInt(Some(n.as_i64().ok_or_else(mismatch)?))
            }
            (ColumnKind::Numeric, JsonValue::Number(n)) => {
                BindValue::Numeric(Some(parse_decimal(&n.to_string()).ok_or_else(mismatch)?))
            }
            (ColumnKind::Numeric, JsonValue::String(s)) => {
                BindValue::Numeric(Some(parse_decimal(s.trim()).ok_or_else(mismatch)?))
            }
            (ColumnKind::Bool, JsonValue::Bool(b)) => BindValue::Bool(Some(b)),
            (ColumnKind::Date, JsonValue::String(s)) => {
                let date = NaiveDate::parse_from_str(&s, "%Y-%m-%d").map_err(|_| mismatch())?;
                BindValue::Date(Some(date))
            }
            (ColumnKind::Timestamp, JsonValue::String(s)) => {
                BindValue::Timestamp(Some(from_rfc3339(&s).map_err(|_| mismatch())?))
            }
            (ColumnKind::Json, other) => BindValue::Json(Some(other)),
            _ => return Err(mismatch()),
        };
        Ok(bound)
    }

    pub fn bind<'q, O>(
        self,
        query: QueryAs<'q, Postgres, O, PgArguments>,
    ) -> QueryAs<'q, Postgres, O, PgArguments> {
        match self {
            BindValue::Text(v) => query.bind(v),
            BindValue::Int(v) => query.bind(v),
            BindValue::BigInt(v) => query.bind(v),
            BindValue::Numeric(v) => query.bind(v),
            BindValue::Bool(v) => query.bind(v),
            BindValue::Date(v) => query.bind(v),
            BindValue::Timestamp(v) => query.bind(v),
            BindValue::Json(v) => query.bind(v),
        }
    }
}

fn parse_decimal(raw: &str) -> Option<Decimal> {
    Decimal::from_str(raw)
        .or_else(|_| Decimal::from_scientific(raw))
        .ok()
}

#[derive(Debug)]
pub struct UpdateStatement {
    pub sql: String,
    pub values: Vec<BindValue>,
    pub id: i64,
}

/// Validates `fields` against `table` and renders the statement. Fails before
/// any store access when the payload is empty, names an unknown column, or
/// carries a value of the wrong shape.
pub fn build_update(
    table: &TableSchema,
    id: i64,
    fields: Map<String, JsonValue>,
) -> Result<UpdateStatement> {
    if fields.is_empty() {
        return Err(Error::BadRequest("No fields provided".to_string()));
    }

    let unknown: Vec<&str> = fields
        .keys()
        .filter(|key| table.column(key).is_none())
        .map(String::as_str)
        .collect();
    if !unknown.is_empty() {
        return Err(Error::BadRequest(format!(
            "Unknown or read-only fields for {}: {}",
            table.name,
            unknown.join(", ")
        )));
    }

    let mut assignments = Vec::with_capacity(fields.len());
    let mut values = Vec::with_capacity(fields.len());
    for (key, value) in fields {
        let column = table
            .column(&key)
            .ok_or_else(|| Error::Internal(format!("column {} vanished", key)))?;
        values.push(BindValue::coerce(column, value)?);
        assignments.push(format!("{} = ${}", column.name, values.len()));
    }

    let sql = format!(
        "UPDATE {} SET {} WHERE id = ${} RETURNING *",
        table.name,
        assignments.join(", "),
        values.len() + 1
    );

    Ok(UpdateStatement { sql, values, id })
}

/// Applies a partial update to one row. `Ok(None)` means no row has that id.
pub async fn update_by_id<T: Entity>(
    pool: &PgPool,
    id: i64,
    fields: Map<String, JsonValue>,
) -> Result<Option<T>> {
    let UpdateStatement { sql, values, id } = build_update(T::SCHEMA, id, fields)?;

    let mut query = sqlx::query_as::<_, T>(&sql);
    for value in values {
        query = value.bind(query);
    }
    let row = query.bind(id).fetch_optional(pool).await?;

    if row.is_none() {
        tracing::debug!(table = T::SCHEMA.name, id, "partial update matched no row");
    }
    Ok(row)
}

/// Like [`update_by_id`], but a missing row is a `NotFound` error named after the entity.
pub async fn update_existing<T: Entity>(
    pool: &PgPool,
    id: i64,
    fields: Map<String, JsonValue>,
) -> Result<T> {
    update_by_id::<T>(pool, id, fields)
        .await?
        .ok_or_else(|| Error::NotFound(format!("{} not found", T::LABEL)))
}
