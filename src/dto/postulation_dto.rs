use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreatePostulationPayload {
    #[validate(required)]
    pub oferta_id: Option<i64>,
    #[validate(required, length(min = 1))]
    pub oferta_titulo: Option<String>,
    /// Derived from `oferta_titulo` when absent, the same way the CMS slugs offers.
    pub oferta_slug: Option<String>,
    pub empresa_id: Option<i64>,
    pub empresa_nombre: Option<String>,
    #[validate(required)]
    pub perfil_id: Option<i64>,
    #[validate(required, email)]
    pub user_email: Option<String>,
    #[validate(length(min = 1))]
    pub estado: Option<String>,
}
