use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;
use sqlx::FromRow;

use crate::database::partial_update::{Column, ColumnKind, Entity, TableSchema};

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Profile {
    pub id: i64,
    pub user_id: i64,
    pub user_email: String,
    pub nombres: String,
    pub apellidos: String,
    pub telefono: Option<String>,
    pub fecha_nacimiento: Option<NaiveDate>,
    pub carrera: String,
    pub ciclo_actual: Option<i32>,
    pub anio_egreso: Option<i32>,
    pub promedio_ponderado: Option<Decimal>,
    pub departamento: Option<String>,
    pub provincia: Option<String>,
    pub distrito: Option<String>,
    pub linkedin_url: Option<String>,
    pub github_url: Option<String>,
    pub portfolio_url: Option<String>,
    pub cv_url: Option<String>,
    pub cv_filename: Option<String>,
    pub cv_uploaded_at: Option<DateTime<Utc>>,
    pub sobre_mi: Option<String>,
    pub habilidades_tecnicas: Option<String>,
    pub habilidades_blandas: Option<String>,
    pub intereses: Option<String>,
    pub experiencia_laboral: Option<JsonValue>,
    pub proyectos: Option<JsonValue>,
    pub idiomas: Option<JsonValue>,
    pub educacion_adicional: Option<JsonValue>,
    pub modalidad_preferida: Option<String>,
    pub disponibilidad: Option<String>,
    pub expectativa_salarial_min: Option<Decimal>,
    pub expectativa_salarial_max: Option<Decimal>,
    pub perfil_publico: Option<bool>,
    pub busca_empleo: Option<bool>,
    pub disponible_inmediato: Option<bool>,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

pub const PERFILES: TableSchema = TableSchema {
    name: "public.perfiles",
    writable: &[
        Column::new("user_id", ColumnKind::BigInt),
        Column::new("user_email", ColumnKind::Text),
        Column::new("nombres", ColumnKind::Text),
        Column::new("apellidos", ColumnKind::Text),
        Column::new("telefono", ColumnKind::Text),
        Column::new("fecha_nacimiento", ColumnKind::Date),
        Column::new("carrera", ColumnKind::Text),
        Column::new("ciclo_actual", ColumnKind::Int),
        Column::new("anio_egreso", ColumnKind::Int),
        Column::new("promedio_ponderado", ColumnKind::Numeric),
        Column::new("departamento", ColumnKind::Text),
        Column::new("provincia", ColumnKind::Text),
        Column::new("distrito", ColumnKind::Text),
        Column::new("linkedin_url", ColumnKind::Text),
        Column::new("github_url", ColumnKind::Text),
        Column::new("portfolio_url", ColumnKind::Text),
        Column::new("cv_url", ColumnKind::Text),
        Column::new("cv_filename", ColumnKind::Text),
        Column::new("cv_uploaded_at", ColumnKind::Timestamp),
        Column::new("sobre_mi", ColumnKind::Text),
        Column::new("habilidades_tecnicas", ColumnKind::Text),
        Column::new("habilidades_blandas", ColumnKind::Text),
        Column::new("intereses", ColumnKind::Text),
        Column::new("experiencia_laboral", ColumnKind::Json),
        Column::new("proyectos", ColumnKind::Json),
        Column::new("idiomas", ColumnKind::Json),
        Column::new("educacion_adicional", ColumnKind::Json),
        Column::new("modalidad_preferida", ColumnKind::Text),
        Column::new("disponibilidad", ColumnKind::Text),
        Column::new("expectativa_salarial_min", ColumnKind::Numeric),
        Column::new("expectativa_salarial_max", ColumnKind::Numeric),
        Column::new("perfil_publico", ColumnKind::Bool),
        Column::new("busca_empleo", ColumnKind::Bool),
        Column::new("disponible_inmediato", ColumnKind::Bool),
        Column::new("updated_at", ColumnKind::Timestamp),
    ],
};

impl Entity for Profile {
    const SCHEMA: &'static TableSchema = &PERFILES;
    const LABEL: &'static str = "Profile";
}
