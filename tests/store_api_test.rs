//! Runs against a real PostgreSQL when `DATABASE_URL` is set; otherwise every
//! test returns early. The reference DDL in `fixtures/schema.sql` is applied once.

mod common;

use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::Arc;
use std::time::{SystemTime, UNIX_EPOCH};

use axum::{http::StatusCode, Router};
use bolsa_laboral_backend::{
    build_router,
    error::Error,
    services::seed_service::{SeedService, SeedStep},
    AppState,
};
use serde_json::{json, Value as JsonValue};
use sqlx::{postgres::PgPoolOptions, Executor, PgPool};
use tokio::sync::OnceCell;

use common::{get, json_request, send, MockStorage};

static SCHEMA_APPLIED: OnceCell<()> = OnceCell::const_new();
static NEXT_USER: AtomicI64 = AtomicI64::new(0);

async fn store() -> Option<PgPool> {
    let url = std::env::var("DATABASE_URL").ok()?;
    let pool = PgPoolOptions::new()
        .max_connections(4)
        .connect(&url)
        .await
        .expect("connect to DATABASE_URL");

    let schema_pool = pool.clone();
    SCHEMA_APPLIED
        .get_or_init(|| async move {
            schema_pool
                .execute(include_str!("fixtures/schema.sql"))
                .await
                .expect("apply schema");
        })
        .await;
    Some(pool)
}

fn app(pool: PgPool) -> Router {
    build_router(AppState::with_storage(pool, Arc::new(MockStorage::new())))
}

/// A `user_id` no other test (or the seed) uses.
fn unique_user_id() -> i64 {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap()
        .as_nanos() as i64;
    1_000_000 + (nanos % 1_000_000_000_000) + NEXT_USER.fetch_add(1, Ordering::SeqCst)
}

async fn create_profile(pool: &PgPool, user_id: i64) -> JsonValue {
    let (status, body) = send(
        app(pool.clone()),
        json_request(
            "POST",
            "/api/perfiles",
            &json!({
                "user_id": user_id,
                "user_email": "a@b.edu",
                "nombres": "Ana",
                "apellidos": "Ruiz",
                "carrera": "X",
                "ciclo_actual": 3
            }),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED, "{body}");
    body
}

#[tokio::test]
async fn profile_create_then_partial_update() {
    let Some(pool) = store().await else { return };
    let user_id = unique_user_id();

    let created = create_profile(&pool, user_id).await;
    assert!(created["id"].as_i64().unwrap() > 0);
    assert_eq!(created["user_id"], user_id);
    assert_eq!(created["user_email"], "a@b.edu");
    assert_eq!(created["nombres"], "Ana");
    assert_eq!(created["apellidos"], "Ruiz");
    assert_eq!(created["carrera"], "X");
    assert_eq!(created["ciclo_actual"], 3);
    let id = created["id"].as_i64().unwrap();

    let (status, body) = send(
        app(pool.clone()),
        json_request("PATCH", &format!("/api/perfiles/{id}"), &json!({})),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({ "error": "No fields provided" }));

    let (status, updated) = send(
        app(pool.clone()),
        json_request(
            "PATCH",
            &format!("/api/perfiles/{id}"),
            &json!({ "ciclo_actual": 5 }),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["ciclo_actual"], 5);

    let mut expected = created.clone();
    expected["ciclo_actual"] = json!(5);
    assert_eq!(updated, expected);
}

#[tokio::test]
async fn patch_writes_typed_values_and_nulls() {
    let Some(pool) = store().await else { return };
    let created = create_profile(&pool, unique_user_id()).await;
    let id = created["id"].as_i64().unwrap();

    let idiomas = json!([{ "idioma": "Inglés", "nivel": "avanzado", "certificacion": null }]);
    let (status, updated) = send(
        app(pool.clone()),
        json_request(
            "PATCH",
            &format!("/api/perfiles/{id}"),
            &json!({
                "fecha_nacimiento": "2001-05-15",
                "promedio_ponderado": 15.5,
                "idiomas": idiomas,
                "busca_empleo": false,
                "cv_uploaded_at": "2024-01-15T10:35:00Z",
                "telefono": null
            }),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::OK, "{updated}");
    assert_eq!(updated["fecha_nacimiento"], "2001-05-15");
    assert_eq!(updated["idiomas"], idiomas);
    assert_eq!(updated["busca_empleo"], false);
    assert_eq!(updated["telefono"], JsonValue::Null);
    assert_eq!(updated["nombres"], "Ana");
    assert!(updated["cv_uploaded_at"].as_str().unwrap().starts_with("2024-01-15T10:35:00"));
}

#[tokio::test]
async fn patch_on_missing_row_is_not_found() {
    let Some(pool) = store().await else { return };

    let (status, body) = send(
        app(pool.clone()),
        json_request(
            "PATCH",
            "/api/perfiles/999999999",
            &json!({ "ciclo_actual": 5 }),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({ "error": "Profile not found" }));
}

#[tokio::test]
async fn postulations_list_newest_first() {
    let Some(pool) = store().await else { return };
    let profile = create_profile(&pool, unique_user_id()).await;
    let perfil_id = profile["id"].as_i64().unwrap();

    let mut ids = Vec::new();
    for (oferta_id, titulo) in [
        (101, "Practicante de Desarrollo Backend"),
        (102, "Analista de Mejora Continua"),
    ] {
        let (status, body) = send(
            app(pool.clone()),
            json_request(
                "POST",
                "/api/postulaciones",
                &json!({
                    "oferta_id": oferta_id,
                    "oferta_titulo": titulo,
                    "perfil_id": perfil_id,
                    "user_email": "a@b.edu"
                }),
            ),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED, "{body}");
        assert_eq!(body["estado"], "enviada");
        ids.push(body["id"].as_i64().unwrap());
    }

    let (status, body) = send(app(pool.clone()), get("/api/postulaciones")).await;
    assert_eq!(status, StatusCode::OK);
    let listed: Vec<i64> = body
        .as_array()
        .unwrap()
        .iter()
        .map(|row| row["id"].as_i64().unwrap())
        .collect();
    assert!(listed.len() <= 100);
    assert!(listed.windows(2).all(|w| w[0] > w[1]));

    let second = listed.iter().position(|id| *id == ids[1]).unwrap();
    let first = listed.iter().position(|id| *id == ids[0]).unwrap();
    assert!(second < first);

    let newest = &body[second];
    assert_eq!(newest["oferta_slug"], "analista-de-mejora-continua");
}

#[tokio::test]
async fn notification_is_marked_read() {
    let Some(pool) = store().await else { return };
    let profile = create_profile(&pool, unique_user_id()).await;

    let (status, created) = send(
        app(pool.clone()),
        json_request(
            "POST",
            "/api/notificaciones",
            &json!({
                "perfil_id": profile["id"],
                "user_email": "a@b.edu",
                "tipo": "sistema",
                "titulo": "Bienvenida",
                "mensaje": "Completa tu perfil"
            }),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED, "{created}");
    assert_eq!(created["leida"], false);
    assert_eq!(created["prioridad"], "normal");

    let id = created["id"].as_i64().unwrap();
    let (status, updated) = send(
        app(pool.clone()),
        json_request(
            "PATCH",
            &format!("/api/notificaciones/{id}"),
            &json!({ "leida": true, "fecha_lectura": "2025-03-01T09:30:00-05:00" }),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["leida"], true);
    assert_eq!(updated["titulo"], "Bienvenida");
}

#[tokio::test]
async fn failed_seed_leaves_the_store_untouched() {
    let Some(pool) = store().await else { return };
    let user_id = unique_user_id();

    let insert = format!(
        "INSERT INTO public.perfiles (user_id, user_email, nombres, apellidos, carrera) \
         VALUES ({user_id}, 'seed@uni.edu.pe', 'Semilla', 'Prueba', 'X')"
    );
    let steps = [
        SeedStep {
            label: "perfiles (temporal)",
            sql: Box::leak(insert.into_boxed_str()),
        },
        SeedStep {
            label: "postulaciones (perfil inexistente)",
            sql: "INSERT INTO public.postulaciones (oferta_id, oferta_titulo, perfil_id, user_email) \
                  VALUES (1, 'x', -1, 'seed@uni.edu.pe')",
        },
    ];

    let err = SeedService::new(pool.clone())
        .run_steps(&steps)
        .await
        .unwrap_err();
    match err {
        Error::Seed(detail) => assert!(detail.starts_with("postulaciones (perfil inexistente)")),
        other => panic!("unexpected error: {other:?}"),
    }

    let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM public.perfiles WHERE user_id = $1")
        .bind(user_id)
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(count, 0);
}

#[tokio::test]
async fn introspection_sees_the_tables() {
    let Some(pool) = store().await else { return };

    let (status, body) = send(app(pool.clone()), get("/api/db/ping")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "status": "ok", "db": { "ok": 1 } }));

    let (status, body) = send(app(pool.clone()), get("/api/db/tables")).await;
    assert_eq!(status, StatusCode::OK);
    assert!(body["tables"]
        .as_array()
        .unwrap()
        .iter()
        .any(|t| t["table_schema"] == "public" && t["table_name"] == "perfiles"));

    let (status, body) = send(app(pool.clone()), get("/api/db/describe?table=notificaciones")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["schema"], "public");
    let columns = body["columns"].as_array().unwrap();
    assert_eq!(columns[0]["column_name"], "id");
    assert!(columns
        .iter()
        .any(|c| c["column_name"] == "leida" && c["data_type"] == "boolean" && c["is_nullable"] == "NO"));
}

/// Profiles, postulations and notifications belonging to the seeded users.
async fn seeded_counts(pool: &PgPool) -> (i64, i64, i64) {
    sqlx::query_as::<_, (i64, i64, i64)>(
        r#"
        SELECT
            (SELECT COUNT(*) FROM public.perfiles WHERE user_id IN (1, 2, 3)),
            (SELECT COUNT(*) FROM public.postulaciones p
                JOIN public.perfiles f ON f.id = p.perfil_id WHERE f.user_id IN (1, 2, 3)),
            (SELECT COUNT(*) FROM public.notificaciones n
                JOIN public.perfiles f ON f.id = n.perfil_id WHERE f.user_id IN (1, 2, 3))
        "#,
    )
    .fetch_one(pool)
    .await
    .unwrap()
}

#[tokio::test]
async fn seed_commits_once_then_rolls_back_on_conflict() {
    let Some(pool) = store().await else { return };

    pool.execute(
        r#"
        DELETE FROM public.notificaciones
            WHERE perfil_id IN (SELECT id FROM public.perfiles WHERE user_id IN (1, 2, 3));
        DELETE FROM public.postulaciones
            WHERE perfil_id IN (SELECT id FROM public.perfiles WHERE user_id IN (1, 2, 3));
        DELETE FROM public.perfiles WHERE user_id IN (1, 2, 3);
        "#,
    )
    .await
    .unwrap();

    let (status, body) = send(app(pool.clone()), json_request("POST", "/api/seed", &json!({}))).await;
    assert_eq!(status, StatusCode::OK, "{body}");
    assert_eq!(body, json!({ "ok": true }));

    assert_eq!(seeded_counts(&pool).await, (3, 4, 6));

    let (status, body) = send(app(pool.clone()), json_request("POST", "/api/seed", &json!({}))).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["error"], "Seed failed");
    assert!(body["detail"].as_str().unwrap().starts_with("perfiles (Juan)"));
    assert_eq!(seeded_counts(&pool).await, (3, 4, 6));
}
