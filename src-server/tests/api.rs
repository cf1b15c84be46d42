use std::time::{Duration, SystemTime, UNIX_EPOCH};

use axum::{
    body::{to_bytes, Body},
    http::{header, Method, Request},
};
use caixa_server::{api::app_router, build_state, config::Config};
use jsonwebtoken::{encode, EncodingKey, Header};
use serde::Serialize;
use tempfile::TempDir;
use tower::ServiceExt;

fn test_config(dir: &TempDir, jwt_secret: Option<&str>) -> Config {
    Config {
        listen_addr: "127.0.0.1:0".parse().unwrap(),
        db_path: dir.path().join("test.db").to_string_lossy().to_string(),
        cors_allow: vec!["*".to_string()],
        request_timeout: Duration::from_secs(5),
        jwt_secret: jwt_secret.map(str::to_string),
    }
}

async fn build_test_router(jwt_secret: Option<&str>) -> (TempDir, axum::Router) {
    let dir = tempfile::tempdir().unwrap();
    let config = test_config(&dir, jwt_secret);
    let state = build_state(&config).await.unwrap();
    (dir, app_router(state, &config))
}

#[derive(Serialize)]
struct Claims {
    sub: String,
    exp: usize,
}

fn mint_token(secret: &str) -> String {
    let exp = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap()
        .as_secs() as usize
        + 3600;
    encode(
        &Header::default(),
        &Claims {
            sub: "tester".to_string(),
            exp,
        },
        &EncodingKey::from_secret(secret.as_bytes()),
    )
    .unwrap()
}

fn json_request(method: Method, uri: &str, body: serde_json::Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

#[tokio::test]
async fn health_endpoints_answer_without_auth() {
    let (_dir, app) = build_test_router(Some("test-secret")).await;

    for uri in ["/api/healthz", "/api/readyz"] {
        let response = app
            .clone()
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), 200, "{uri}");
    }
}

#[tokio::test]
async fn protected_routes_require_a_bearer_token() {
    let secret = "test-secret";
    let (_dir, app) = build_test_router(Some(secret)).await;

    let bare = app
        .clone()
        .oneshot(
            Request::builder()
                .uri("/api/companies")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(bare.status(), 401);

    let wrong = app
        .clone()
        .oneshot(
            Request::builder()
                .uri("/api/companies")
                .header(header::AUTHORIZATION, "Bearer not-a-token")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(wrong.status(), 401);

    let token = mint_token(secret);
    let authed = app
        .oneshot(
            Request::builder()
                .uri("/api/companies")
                .header(header::AUTHORIZATION, format!("Bearer {token}"))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(authed.status(), 200);
}

#[tokio::test]
async fn company_crud_maps_core_errors_to_http_statuses() {
    let (_dir, app) = build_test_router(None).await;

    let payload = serde_json::json!({
        "name": "Padaria Central",
        "legalName": "Padaria Central Ltda",
        "taxId": "11.222.333/0001-44"
    });

    let created = app
        .clone()
        .oneshot(json_request(Method::POST, "/api/companies", payload.clone()))
        .await
        .unwrap();
    assert_eq!(created.status(), 201);
    let body = to_bytes(created.into_body(), usize::MAX).await.unwrap();
    let company: serde_json::Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(company["name"], "Padaria Central");
    assert_eq!(company["status"], "active");

    // Same tax id again is a conflict.
    let duplicate = app
        .clone()
        .oneshot(json_request(Method::POST, "/api/companies", payload))
        .await
        .unwrap();
    assert_eq!(duplicate.status(), 409);

    // Unknown body fields are rejected before the service runs.
    let unknown_field = serde_json::json!({
        "name": "Outra",
        "legalName": "Outra Ltda",
        "taxId": "99.888.777/0001-00",
        "unexpected": true
    });
    let rejected = app
        .clone()
        .oneshot(json_request(Method::POST, "/api/companies", unknown_field))
        .await
        .unwrap();
    assert!(rejected.status().is_client_error());

    let missing = app
        .clone()
        .oneshot(
            Request::builder()
                .uri("/api/companies/nope")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(missing.status(), 404);

    // Deleting an id that was never created is a 404, not a silent 204.
    let gone = app
        .clone()
        .oneshot(
            Request::builder()
                .method(Method::DELETE)
                .uri("/api/companies/nope")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(gone.status(), 404);

    let deleted = app
        .oneshot(
            Request::builder()
                .method(Method::DELETE)
                .uri(format!("/api/companies/{}", company["id"].as_str().unwrap()))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(deleted.status(), 204);
}

#[tokio::test]
async fn goal_with_an_unknown_category_is_a_not_found_error() {
    let (_dir, app) = build_test_router(None).await;

    let goal = serde_json::json!({
        "name": "Ghost",
        "goalType": "category",
        "targetAmount": 100.0,
        "month": 1,
        "year": 2026,
        "categoryId": "no-such-category"
    });
    let response = app
        .oneshot(json_request(Method::POST, "/api/financial-goals", goal))
        .await
        .unwrap();
    assert_eq!(response.status(), 404);
}

#[tokio::test]
async fn recurrence_expansion_is_visible_through_the_api() {
    let (_dir, app) = build_test_router(None).await;

    let payload = serde_json::json!({
        "description": "Aluguel",
        "amount": 1200.0,
        "dueDate": "2026-01-25",
        "recurrence": "monthly",
        "recurrenceEnd": "2026-12-25"
    });
    let created = app
        .clone()
        .oneshot(json_request(Method::POST, "/api/accounts-payable", payload))
        .await
        .unwrap();
    assert_eq!(created.status(), 201);

    let listed = app
        .clone()
        .oneshot(
            Request::builder()
                .uri("/api/accounts-payable")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(listed.status(), 200);
    let body = to_bytes(listed.into_body(), usize::MAX).await.unwrap();
    let rows: Vec<serde_json::Value> = serde_json::from_slice(&body).unwrap();
    assert_eq!(rows.len(), 12);

    let march = app
        .oneshot(
            Request::builder()
                .uri("/api/accounts-payable?month=3&year=2026")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    let body = to_bytes(march.into_body(), usize::MAX).await.unwrap();
    let rows: Vec<serde_json::Value> = serde_json::from_slice(&body).unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0]["dueDate"], "2026-03-25");
}

#[tokio::test]
async fn period_endpoints_validate_their_query_parameters() {
    let (_dir, app) = build_test_router(None).await;

    // Month without year.
    let half = app
        .clone()
        .oneshot(
            Request::builder()
                .uri("/api/accounts-payable?month=3")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(half.status(), 400);

    // Summary needs both.
    let summary = app
        .clone()
        .oneshot(
            Request::builder()
                .uri("/api/cash-flow/summary")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(summary.status(), 400);

    let progress = app
        .oneshot(
            Request::builder()
                .uri("/api/financial-goals/progress?month=7&year=2026")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(progress.status(), 200);
}

#[tokio::test]
async fn goal_progress_flows_from_ledger_to_api() {
    let (_dir, app) = build_test_router(None).await;

    for amount in [2000.0, 1000.0, 500.0] {
        let payload = serde_json::json!({
            "description": "Fatura",
            "amount": amount,
            "dueDate": "2026-07-10"
        });
        let response = app
            .clone()
            .oneshot(json_request(
                Method::POST,
                "/api/accounts-receivable",
                payload,
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), 201);
    }

    let goal = serde_json::json!({
        "name": "Receita de julho",
        "goalType": "income_total",
        "targetAmount": 5000.0,
        "month": 7,
        "year": 2026
    });
    let created = app
        .clone()
        .oneshot(json_request(Method::POST, "/api/financial-goals", goal))
        .await
        .unwrap();
    assert_eq!(created.status(), 201);

    let progress = app
        .oneshot(
            Request::builder()
                .uri("/api/financial-goals/progress?month=7&year=2026")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(progress.status(), 200);
    let body = to_bytes(progress.into_body(), usize::MAX).await.unwrap();
    let rows: Vec<serde_json::Value> = serde_json::from_slice(&body).unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0]["currentAmount"], 3500.0);
    assert_eq!(rows[0]["percentage"], 70.0);
}
