use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;
use sqlx::FromRow;

use crate::database::partial_update::{Column, ColumnKind, Entity, TableSchema};

/// Values seen in `estado`. The column is an open enumeration; nothing
/// rejects other strings.
pub const KNOWN_STATES: &[&str] = &[
    "enviada",
    "en_revision",
    "entrevista_programada",
    "rechazada",
];

pub const DEFAULT_STATE: &str = "enviada";

/// Job application. The offer is referenced by denormalized id/title/slug,
/// not by a foreign key into the CMS.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Postulation {
    pub id: i64,
    pub oferta_id: i64,
    pub oferta_titulo: String,
    pub oferta_slug: Option<String>,
    pub empresa_id: Option<i64>,
    pub empresa_nombre: Option<String>,
    pub empresa_logo_url: Option<String>,
    pub empresa_contacto_email: Option<String>,
    pub perfil_id: i64,
    pub user_email: String,
    pub carta_presentacion: Option<String>,
    pub cv_url: Option<String>,
    pub respuestas_adicionales: Option<JsonValue>,
    pub estado: String,
    pub notas_internas: Option<String>,
    pub historial_estados: Option<JsonValue>,
    pub email_enviado: Option<bool>,
    pub fecha_email_enviado: Option<DateTime<Utc>>,
    pub ip_address: Option<String>,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

pub const POSTULACIONES: TableSchema = TableSchema {
    name: "public.postulaciones",
    writable: &[
        Column::new("oferta_id", ColumnKind::BigInt),
        Column::new("oferta_titulo", ColumnKind::Text),
        Column::new("oferta_slug", ColumnKind::Text),
        Column::new("empresa_id", ColumnKind::BigInt),
        Column::new("empresa_nombre", ColumnKind::Text),
        Column::new("empresa_logo_url", ColumnKind::Text),
        Column::new("empresa_contacto_email", ColumnKind::Text),
        Column::new("perfil_id", ColumnKind::BigInt),
        Column::new("user_email", ColumnKind::Text),
        Column::new("carta_presentacion", ColumnKind::Text),
        Column::new("cv_url", ColumnKind::Text),
        Column::new("respuestas_adicionales", ColumnKind::Json),
        Column::new("estado", ColumnKind::Text),
        Column::new("notas_internas", ColumnKind::Text),
        Column::new("historial_estados", ColumnKind::Json),
        Column::new("email_enviado", ColumnKind::Bool),
        Column::new("fecha_email_enviado", ColumnKind::Timestamp),
        Column::new("ip_address", ColumnKind::Text),
        Column::new("updated_at", ColumnKind::Timestamp),
    ],
};

impl Entity for Postulation {
    const SCHEMA: &'static TableSchema = &POSTULACIONES;
    const LABEL: &'static str = "Postulation";
}
