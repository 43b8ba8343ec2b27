//! Runs a document through a collection's field rules the way the CMS does
//! before it saves: conditions, defaults, slug hooks, then validation.
//! Updates are partial, so only present fields are checked.

use serde_json::{Map, Value as JsonValue};
use validator::ValidateEmail;

use super::schema::{Collection, Condition, DefaultValue, Field, FieldKind};
use super::slug::resolve_slug;
use super::Operation;
use crate::error::{Error, Result};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldIssue {
    pub path: String,
    pub message: String,
}

pub fn prepare(
    collection: &Collection,
    operation: Operation,
    mut doc: Map<String, JsonValue>,
) -> Result<Map<String, JsonValue>> {
    let mut issues = Vec::new();
    apply_fields(collection.fields, operation, &mut doc, "", &mut issues);

    if issues.is_empty() {
        Ok(doc)
    } else {
        let detail = issues
            .iter()
            .map(|i| format!("{}: {}", i.path, i.message))
            .collect::<Vec<_>>()
            .join("; ");
        Err(Error::BadRequest(format!(
            "Invalid {} document: {}",
            collection.slug, detail
        )))
    }
}

fn apply_fields(
    fields: &[Field],
    operation: Operation,
    doc: &mut Map<String, JsonValue>,
    prefix: &str,
    issues: &mut Vec<FieldIssue>,
) {
    for field in fields {
        if !condition_holds(field.condition.as_ref(), doc) {
            continue;
        }

        let path = if prefix.is_empty() {
            field.name.to_string()
        } else {
            format!("{}.{}", prefix, field.name)
        };

        if operation == Operation::Create && !doc.contains_key(field.name) {
            if let Some(default) = &field.default_value {
                doc.insert(field.name.to_string(), default_to_json(default));
            }
        }

        if let Some(source) = field.slug_from {
            if let Some(slug) = resolve_slug(operation, doc, field.name, source) {
                doc.insert(field.name.to_string(), JsonValue::String(slug));
            }
        }

        if let FieldKind::Group { fields: inner } = &field.kind {
            match doc.get_mut(field.name) {
                Some(JsonValue::Object(group)) => {
                    apply_fields(inner, operation, group, &path, issues);
                }
                Some(JsonValue::Null) | None => {
                    let mut group = Map::new();
                    apply_fields(inner, operation, &mut group, &path, issues);
                    if !group.is_empty() {
                        doc.insert(field.name.to_string(), JsonValue::Object(group));
                    }
                }
                Some(_) => issues.push(issue(&path, "must be an object")),
            }
            continue;
        }

        match doc.get(field.name) {
            None => {
                if field.required && operation == Operation::Create {
                    issues.push(issue(&path, "is required"));
                }
            }
            Some(value) if is_blank(value) => {
                if field.required {
                    issues.push(issue(&path, "is required"));
                }
            }
            Some(value) => {
                if let Some(message) = check_value(&field.kind, value) {
                    issues.push(issue(&path, &message));
                }
            }
        }
    }
}

fn condition_holds(condition: Option<&Condition>, doc: &Map<String, JsonValue>) -> bool {
    match condition {
        None => true,
        Some(Condition::NotEquals { field, value }) => {
            doc.get(*field).and_then(JsonValue::as_str) != Some(*value)
        }
    }
}

fn default_to_json(default: &DefaultValue) -> JsonValue {
    match default {
        DefaultValue::Bool(b) => JsonValue::Bool(*b),
        DefaultValue::Number(n) => JsonValue::from(*n),
        DefaultValue::Text(s) => JsonValue::String((*s).to_string()),
        DefaultValue::Now => JsonValue::String(crate::utils::time::now_rfc3339()),
    }
}

fn is_blank(value: &JsonValue) -> bool {
    match value {
        JsonValue::Null => true,
        JsonValue::String(s) => s.trim().is_empty(),
        _ => false,
    }
}

fn check_value(kind: &FieldKind, value: &JsonValue) -> Option<String> {
    match kind {
        FieldKind::Text | FieldKind::Textarea => {
            (!value.is_string()).then(|| "must be a string".to_string())
        }
        FieldKind::Email => match value.as_str() {
            Some(s) if s.validate_email() => None,
            _ => Some("must be a valid email address".to_string()),
        },
        FieldKind::RichText => None,
        FieldKind::Number { min } => match value.as_f64() {
            None => Some("must be a number".to_string()),
            Some(n) => match min {
                Some(min) if n < *min as f64 => Some(format!("must be at least {}", min)),
                _ => None,
            },
        },
        FieldKind::Checkbox => (!value.is_boolean()).then(|| "must be a boolean".to_string()),
        FieldKind::Date => match value.as_str() {
            Some(s) if is_date(s) => None,
            _ => Some("must be an ISO 8601 date".to_string()),
        },
        FieldKind::Select { options } => match value.as_str() {
            Some(s) if options.iter().any(|o| o.value == s) => None,
            _ => Some(format!(
                "must be one of: {}",
                options.iter().map(|o| o.value).collect::<Vec<_>>().join(", ")
            )),
        },
        FieldKind::Upload { .. } | FieldKind::Relationship { .. } => {
            (!(value.is_string() || value.is_i64() || value.is_u64()))
                .then(|| "must be a document id".to_string())
        }
        FieldKind::Group { .. } => None,
    }
}

fn is_date(s: &str) -> bool {
    chrono::DateTime::parse_from_rfc3339(s).is_ok()
        || chrono::NaiveDate::parse_from_str(s, "%Y-%m-%d").is_ok()
}

fn issue(path: &str, message: &str) -> FieldIssue {
    FieldIssue {
        path: path.to_string(),
        message: message.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cms::collections::{COMPANIES, COURSES, OFFERS};
    use serde_json::json;

    fn doc(value: JsonValue) -> Map<String, JsonValue> {
        value.as_object().cloned().unwrap()
    }

    fn message(err: Error) -> String {
        match err {
            Error::BadRequest(msg) => msg,
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn company_create_fills_defaults_and_slug() {
        let prepared = prepare(
            &COMPANIES,
            Operation::Create,
            doc(json!({
                "nombre_comercial": "TechCorp Perú",
                "sector": "tecnologia",
                "email_contacto": "rrhh@techcorp.com"
            })),
        )
        .unwrap();

        assert_eq!(prepared["slug"], json!("techcorp-peru"));
        assert_eq!(prepared["tiene_convenio"], json!(false));
        assert_eq!(prepared["activo"], json!(true));
    }

    #[test]
    fn missing_required_fields_are_listed() {
        let msg = message(prepare(&COMPANIES, Operation::Create, Map::new()).unwrap_err());
        assert!(msg.contains("nombre_comercial: is required"));
        assert!(msg.contains("sector: is required"));
        assert!(msg.contains("email_contacto: is required"));
        assert!(msg.contains("slug: is required"));
    }

    #[test]
    fn select_values_must_be_known_options() {
        let msg = message(
            prepare(
                &COURSES,
                Operation::Create,
                doc(json!({
                    "titulo": "Python para Data Science",
                    "descripcion": "Curso introductorio",
                    "proveedor": "Coursera",
                    "url": "https://coursera.org/python",
                    "nivel": "experto"
                })),
            )
            .unwrap_err(),
        );
        assert!(msg.contains("nivel: must be one of: basico, intermedio, avanzado"));
    }

    #[test]
    fn number_minimum_is_enforced() {
        let msg = message(
            prepare(&COURSES, Operation::Update, doc(json!({ "duracionHoras": -4 }))).unwrap_err(),
        );
        assert!(msg.contains("duracionHoras: must be at least 0"));
    }

    #[test]
    fn partial_update_only_checks_present_fields() {
        let prepared = prepare(
            &COURSES,
            Operation::Update,
            doc(json!({ "destacado": true })),
        )
        .unwrap();
        assert_eq!(prepared, doc(json!({ "destacado": true })));
    }

    fn remote_offer() -> Map<String, JsonValue> {
        doc(json!({
            "titulo": "Desarrollador Full Stack Senior",
            "company": 4,
            "descripcion": { "root": { "children": [] } },
            "requisitos": "3+ años",
            "modalidad": "remoto",
            "tipo_contrato": "tiempo_completo",
            "ubicacion": { "departamento": 12 }
        }))
    }

    #[test]
    fn offer_location_is_skipped_for_remote_work() {
        let prepared = prepare(&OFFERS, Operation::Create, remote_offer()).unwrap();
        assert_eq!(prepared["slug"], json!("desarrollador-full-stack-senior"));
        assert_eq!(prepared["estado"], json!("activa"));
        assert_eq!(prepared["nivel_experiencia"], json!("sin_experiencia"));
        assert_eq!(prepared["vistas"], json!(0));
        assert!(prepared["fecha_publicacion"].is_string());
        assert_eq!(prepared["compensacion"]["mostrar_salario"], json!(true));
    }

    #[test]
    fn offer_location_is_checked_on_site() {
        let mut offer = remote_offer();
        offer.insert("modalidad".into(), json!("presencial"));
        let msg = message(prepare(&OFFERS, Operation::Create, offer).unwrap_err());
        assert!(msg.contains("ubicacion.departamento: must be a string"));
    }
}
