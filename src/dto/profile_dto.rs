use serde::{Deserialize, Serialize};
use validator::Validate;

/// Fields accepted on profile creation; everything else takes store defaults.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateProfilePayload {
    #[validate(required)]
    pub user_id: Option<i64>,
    #[validate(required, email)]
    pub user_email: Option<String>,
    #[validate(required, length(min = 1))]
    pub nombres: Option<String>,
    #[validate(required, length(min = 1))]
    pub apellidos: Option<String>,
    #[validate(required, length(min = 1))]
    pub carrera: Option<String>,
    #[validate(required, range(min = 0))]
    pub ciclo_actual: Option<i32>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn complete_payload_validates() {
        let payload: CreateProfilePayload = serde_json::from_value(json!({
            "user_id": 9,
            "user_email": "a@b.edu",
            "nombres": "Ana",
            "apellidos": "Ruiz",
            "carrera": "X",
            "ciclo_actual": 3
        }))
        .unwrap();
        assert!(payload.validate().is_ok());
    }

    #[test]
    fn missing_fields_are_reported_by_name() {
        let payload: CreateProfilePayload = serde_json::from_value(json!({
            "user_id": 9,
            "user_email": "a@b.edu"
        }))
        .unwrap();
        let errors = payload.validate().unwrap_err();
        let fields = errors.field_errors();
        assert!(fields.contains_key("nombres"));
        assert!(fields.contains_key("apellidos"));
        assert!(fields.contains_key("carrera"));
        assert!(fields.contains_key("ciclo_actual"));
        assert!(!fields.contains_key("user_id"));
    }
}
