use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;
use sqlx::FromRow;

use crate::database::partial_update::{Column, ColumnKind, Entity, TableSchema};

pub const PRIORITIES: &[&str] = &["baja", "normal", "alta", "urgente"];

pub const DEFAULT_PRIORITY: &str = "normal";

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Notification {
    pub id: i64,
    pub perfil_id: i64,
    pub user_email: String,
    pub tipo: String,
    pub titulo: String,
    pub mensaje: String,
    pub url: Option<String>,
    pub accion_principal: Option<String>,
    pub accion_secundaria: Option<String>,
    pub entidad_tipo: Option<String>,
    pub entidad_id: Option<i64>,
    pub metadata: Option<JsonValue>,
    pub leida: bool,
    pub fecha_lectura: Option<DateTime<Utc>>,
    pub prioridad: String,
    pub created_at: Option<DateTime<Utc>>,
}

pub const NOTIFICACIONES: TableSchema = TableSchema {
    name: "public.notificaciones",
    writable: &[
        Column::new("perfil_id", ColumnKind::BigInt),
        Column::new("user_email", ColumnKind::Text),
        Column::new("tipo", ColumnKind::Text),
        Column::new("titulo", ColumnKind::Text),
        Column::new("mensaje", ColumnKind::Text),
        Column::new("url", ColumnKind::Text),
        Column::new("accion_principal", ColumnKind::Text),
        Column::new("accion_secundaria", ColumnKind::Text),
        Column::new("entidad_tipo", ColumnKind::Text),
        Column::new("entidad_id", ColumnKind::BigInt),
        Column::new("metadata", ColumnKind::Json),
        Column::new("leida", ColumnKind::Bool),
        Column::new("fecha_lectura", ColumnKind::Timestamp),
        Column::new("prioridad", ColumnKind::Text),
    ],
};

impl Entity for Notification {
    const SCHEMA: &'static TableSchema = &NOTIFICACIONES;
    const LABEL: &'static str = "Notification";
}
