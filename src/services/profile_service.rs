use serde_json::{Map, Value as JsonValue};
use sqlx::PgPool;

use crate::database::{partial_update, rows};
use crate::dto::profile_dto::CreateProfilePayload;
use crate::error::Result;
use crate::models::profile::Profile;

#[derive(Clone)]
pub struct ProfileService {
    pool: PgPool,
}

impl ProfileService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn list(&self) -> Result<Vec<Profile>> {
        rows::latest(&self.pool).await
    }

    /// Expects a payload that already passed validation.
    pub async fn create(&self, payload: CreateProfilePayload) -> Result<Profile> {
        let profile = sqlx::query_as::<_, Profile>(
            r#"
            INSERT INTO public.perfiles (user_id, user_email, nombres, apellidos, carrera, ciclo_actual)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING *
            "#,
        )
        .bind(payload.user_id)
        .bind(payload.user_email)
        .bind(payload.nombres)
        .bind(payload.apellidos)
        .bind(payload.carrera)
        .bind(payload.ciclo_actual)
        .fetch_one(&self.pool)
        .await?;

        tracing::info!(id = profile.id, user_id = profile.user_id, "profile created");
        Ok(profile)
    }

    pub async fn update(&self, id: i64, fields: Map<String, JsonValue>) -> Result<Profile> {
        partial_update::update_existing::<Profile>(&self.pool, id, fields).await
    }
}
