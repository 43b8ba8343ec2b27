use sqlx::PgPool;

use crate::dto::db_dto::{ColumnInfo, PingRow, TableRef};
use crate::error::Result;

pub async fn ping(pool: &PgPool) -> Result<PingRow> {
    let row = sqlx::query_as::<_, PingRow>("SELECT 1::int4 AS ok")
        .fetch_one(pool)
        .await?;
    Ok(row)
}

/// Base tables outside the system catalogs.
pub async fn list_tables(pool: &PgPool) -> Result<Vec<TableRef>> {
    let rows = sqlx::query_as::<_, TableRef>(
        r#"
        SELECT table_schema::text AS table_schema, table_name::text AS table_name
        FROM information_schema.tables
        WHERE table_type = 'BASE TABLE'
          AND table_schema NOT IN ('pg_catalog', 'information_schema')
        ORDER BY table_schema, table_name
        "#,
    )
    .fetch_all(pool)
    .await?;
    Ok(rows)
}

/// Column metadata in ordinal order. Empty when the table does not exist.
pub async fn describe_table(pool: &PgPool, schema: &str, table: &str) -> Result<Vec<ColumnInfo>> {
    let rows = sqlx::query_as::<_, ColumnInfo>(
        r#"
        SELECT
            c.column_name::text AS column_name,
            c.data_type::text AS data_type,
            c.character_maximum_length::int4 AS character_maximum_length,
            c.numeric_precision::int4 AS numeric_precision,
            c.numeric_scale::int4 AS numeric_scale,
            c.is_nullable::text AS is_nullable,
            c.column_default::text AS column_default
        FROM information_schema.columns c
        WHERE c.table_schema::text = $1 AND c.table_name::text = $2
        ORDER BY c.ordinal_position
        "#,
    )
    .bind(schema)
    .bind(table)
    .fetch_all(pool)
    .await?;
    Ok(rows)
}
