use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct PingRow {
    pub ok: i32,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct TableRef {
    pub table_schema: String,
    pub table_name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct ColumnInfo {
    pub column_name: String,
    pub data_type: String,
    pub character_maximum_length: Option<i32>,
    pub numeric_precision: Option<i32>,
    pub numeric_scale: Option<i32>,
    pub is_nullable: String,
    pub column_default: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct DescribeQuery {
    pub table: Option<String>,
    pub schema: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct DescribeResponse {
    pub schema: String,
    pub table: String,
    pub columns: Vec<ColumnInfo>,
}

#[derive(Debug, Clone, Serialize)]
pub struct TablesResponse {
    pub tables: Vec<TableRef>,
}

#[derive(Debug, Clone, Serialize)]
pub struct PingResponse {
    pub status: &'static str,
    pub db: PingRow,
}
