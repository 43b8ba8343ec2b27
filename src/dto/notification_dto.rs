use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateNotificationPayload {
    #[validate(required)]
    pub perfil_id: Option<i64>,
    #[validate(required, email)]
    pub user_email: Option<String>,
    #[validate(required, length(min = 1))]
    pub tipo: Option<String>,
    #[validate(required, length(min = 1))]
    pub titulo: Option<String>,
    #[validate(required, length(min = 1))]
    pub mensaje: Option<String>,
    pub prioridad: Option<String>,
}
