use serde_json::{Map, Value as JsonValue};
use sqlx::PgPool;

use crate::cms::slug::slugify;
use crate::database::{partial_update, rows};
use crate::dto::postulation_dto::CreatePostulationPayload;
use crate::error::Result;
use crate::models::postulation::{Postulation, DEFAULT_STATE, KNOWN_STATES};

#[derive(Clone)]
pub struct PostulationService {
    pool: PgPool,
}

impl PostulationService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn list(&self) -> Result<Vec<Postulation>> {
        rows::latest(&self.pool).await
    }

    pub async fn create(&self, payload: CreatePostulationPayload) -> Result<Postulation> {
        let oferta_slug = resolve_offer_slug(&payload);
        let estado = payload
            .estado
            .clone()
            .unwrap_or_else(|| DEFAULT_STATE.to_string());
        if !KNOWN_STATES.contains(&estado.as_str()) {
            tracing::debug!(estado = %estado, "postulation created with an unlisted state");
        }

        let postulation = sqlx::query_as::<_, Postulation>(
            r#"
            INSERT INTO public.postulaciones (
                oferta_id, oferta_titulo, oferta_slug, empresa_id, empresa_nombre,
                perfil_id, user_email, estado
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            RETURNING *
            "#,
        )
        .bind(payload.oferta_id)
        .bind(payload.oferta_titulo)
        .bind(oferta_slug)
        .bind(payload.empresa_id)
        .bind(payload.empresa_nombre)
        .bind(payload.perfil_id)
        .bind(payload.user_email)
        .bind(estado)
        .fetch_one(&self.pool)
        .await?;

        tracing::info!(
            id = postulation.id,
            perfil_id = postulation.perfil_id,
            oferta_id = postulation.oferta_id,
            "postulation created"
        );
        Ok(postulation)
    }

    pub async fn update(&self, id: i64, fields: Map<String, JsonValue>) -> Result<Postulation> {
        partial_update::update_existing::<Postulation>(&self.pool, id, fields).await
    }
}

/// The offer slug the CMS would have generated, unless the caller sent one.
fn resolve_offer_slug(payload: &CreatePostulationPayload) -> Option<String> {
    match payload.oferta_slug.as_deref() {
        Some(slug) if !slug.trim().is_empty() => Some(slug.to_string()),
        _ => payload
            .oferta_titulo
            .as_deref()
            .map(slugify)
            .filter(|s| !s.is_empty()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn payload(value: JsonValue) -> CreatePostulationPayload {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn slug_is_derived_from_the_offer_title() {
        let p = payload(json!({
            "oferta_id": 103,
            "oferta_titulo": "Ingeniero de Diseño Mecánico Junior",
            "perfil_id": 3,
            "user_email": "carlos.rodriguez@uni.edu.pe"
        }));
        assert_eq!(
            resolve_offer_slug(&p).as_deref(),
            Some("ingeniero-de-diseno-mecanico-junior")
        );
    }

    #[test]
    fn explicit_slug_wins() {
        let p = payload(json!({
            "oferta_id": 101,
            "oferta_titulo": "Practicante de Desarrollo Backend",
            "oferta_slug": "practicante-desarrollo-backend",
            "perfil_id": 1,
            "user_email": "juan.perez@uni.edu.pe"
        }));
        assert_eq!(
            resolve_offer_slug(&p).as_deref(),
            Some("practicante-desarrollo-backend")
        );
    }
}
