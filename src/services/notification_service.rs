use serde_json::{Map, Value as JsonValue};
use sqlx::PgPool;

use crate::database::{partial_update, rows};
use crate::dto::notification_dto::CreateNotificationPayload;
use crate::error::Result;
use crate::models::notification::{Notification, DEFAULT_PRIORITY, PRIORITIES};

#[derive(Clone)]
pub struct NotificationService {
    pool: PgPool,
}

impl NotificationService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn list(&self) -> Result<Vec<Notification>> {
        rows::latest(&self.pool).await
    }

    pub async fn create(&self, payload: CreateNotificationPayload) -> Result<Notification> {
        let prioridad = payload
            .prioridad
            .clone()
            .unwrap_or_else(|| DEFAULT_PRIORITY.to_string());
        if !PRIORITIES.contains(&prioridad.as_str()) {
            tracing::debug!(prioridad = %prioridad, "notification created with an unlisted priority");
        }

        let notification = sqlx::query_as::<_, Notification>(
            r#"
            INSERT INTO public.notificaciones (perfil_id, user_email, tipo, titulo, mensaje, prioridad)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING *
            "#,
        )
        .bind(payload.perfil_id)
        .bind(payload.user_email)
        .bind(payload.tipo)
        .bind(payload.titulo)
        .bind(payload.mensaje)
        .bind(prioridad)
        .fetch_one(&self.pool)
        .await?;

        tracing::info!(
            id = notification.id,
            perfil_id = notification.perfil_id,
            tipo = %notification.tipo,
            "notification created"
        );
        Ok(notification)
    }

    /// Usually `{ "leida": true, "fecha_lectura": ... }`, but any writable column is accepted.
    pub async fn update(&self, id: i64, fields: Map<String, JsonValue>) -> Result<Notification> {
        partial_update::update_existing::<Notification>(&self.pool, id, fields).await
    }
}
