//! End-to-end API tests.
//!
//! Each test builds the production router over a fresh in-memory
//! database and drives it with `tower::ServiceExt::oneshot`; no socket
//! is bound anywhere.

use axum::body::{to_bytes, Body};
use axum::http::{header, Request, StatusCode};
use axum::Router;
use serde_json::{json, Value};
use tower::util::ServiceExt;

use acronyms_db::{Database, DbConfig};
use acronyms_server::{build_router, AppState, Settings};

async fn test_app() -> Router {
    let db = Database::new(DbConfig::in_memory()).await.unwrap();
    build_router(AppState::new(db, Settings::default()))
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

fn json_request(method: &str, uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

async fn body_json(response: axum::response::Response) -> Value {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

/// Creates an acronym and returns its id.
async fn create(app: &Router, abbreviation: &str, phrase: &str) -> i64 {
    let response = app
        .clone()
        .oneshot(json_request(
            "POST",
            "/api/acronym",
            json!({ "abbreviation": abbreviation, "phrase": phrase }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    body_json(response).await.as_i64().unwrap()
}

async fn seed(app: &Router) -> (i64, i64, i64) {
    let am = create(app, "AM", "Ante Meridiem").await;
    let dm1 = create(app, "DM", "Data Mining").await;
    let dm2 = create(app, "DM", "Direct Message").await;
    (am, dm1, dm2)
}

// =============================================================================
// CRUD
// =============================================================================

#[tokio::test]
async fn test_create_then_lookup_by_id() {
    let app = test_app().await;
    let id = create(&app, "AM", "Ante Meridiem").await;

    let response = app
        .clone()
        .oneshot(get(&format!("/api/acronym?id={id}")))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    assert_eq!(body["id"], json!(id));
    assert_eq!(body["abbreviation"], json!("AM"));
    assert_eq!(body["phrase"], json!("Ante Meridiem"));
    assert_eq!(body["description"], Value::Null);
}

#[tokio::test]
async fn test_lookup_missing_id_is_404() {
    let app = test_app().await;

    let response = app.oneshot(get("/api/acronym?id=999")).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_duplicate_pair_conflicts() {
    let app = test_app().await;
    create(&app, "DM", "Data Mining").await;

    let response = app
        .clone()
        .oneshot(json_request(
            "POST",
            "/api/acronym",
            json!({ "abbreviation": "DM", "phrase": "Data Mining" }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CONFLICT);

    // Same abbreviation with a different phrase is fine
    create(&app, "DM", "Direct Message").await;
}

#[tokio::test]
async fn test_create_rejects_invalid_fields() {
    let app = test_app().await;

    for body in [
        json!({ "abbreviation": "", "phrase": "Data Mining" }),
        json!({ "abbreviation": "DM", "phrase": "" }),
        json!({ "abbreviation": "A".repeat(31), "phrase": "x" }),
        json!({ "abbreviation": "DM", "phrase": "a".repeat(301) }),
    ] {
        let response = app
            .clone()
            .oneshot(json_request("POST", "/api/acronym", body))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }
}

#[tokio::test]
async fn test_replace_updates_the_row() {
    let app = test_app().await;
    let id = create(&app, "AM", "Ante Meridiem").await;

    let response = app
        .clone()
        .oneshot(json_request(
            "PUT",
            &format!("/api/acronym/{id}"),
            json!({ "abbreviation": "AM", "description": "radio", "phrase": "Amplitude Modulation" }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await, json!({ "ok": true }));

    let body = body_json(
        app.clone()
            .oneshot(get(&format!("/api/acronym?id={id}")))
            .await
            .unwrap(),
    )
    .await;
    assert_eq!(body["phrase"], json!("Amplitude Modulation"));
    assert_eq!(body["description"], json!("radio"));
}

#[tokio::test]
async fn test_replace_missing_id_succeeds_without_creating() {
    let app = test_app().await;

    let response = app
        .clone()
        .oneshot(json_request(
            "PUT",
            "/api/acronym/999",
            json!({ "abbreviation": "AM", "phrase": "Ante Meridiem" }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await, json!({ "ok": true }));

    // Nothing was created
    let response = app.clone().oneshot(get("/api/acronym")).await.unwrap();
    assert_eq!(body_json(response).await, json!([]));
}

#[tokio::test]
async fn test_replace_onto_existing_pair_conflicts() {
    let app = test_app().await;
    let (_, dm1, _) = seed(&app).await;

    // Would collide with the other DM row
    let response = app
        .clone()
        .oneshot(json_request(
            "PUT",
            &format!("/api/acronym/{dm1}"),
            json!({ "abbreviation": "DM", "phrase": "Direct Message" }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CONFLICT);

    // The target row is unchanged
    let body = body_json(
        app.clone()
            .oneshot(get(&format!("/api/acronym?id={dm1}")))
            .await
            .unwrap(),
    )
    .await;
    assert_eq!(body["phrase"], json!("Data Mining"));
}

#[tokio::test]
async fn test_delete_removes_the_row() {
    let app = test_app().await;
    let (am, _, _) = seed(&app).await;

    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method("DELETE")
                .uri(format!("/api/acronym/{am}"))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await, json!({ "ok": true }));

    let response = app
        .clone()
        .oneshot(get(&format!("/api/acronym?id={am}")))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_delete_missing_id_is_404() {
    let app = test_app().await;

    let response = app
        .oneshot(
            Request::builder()
                .method("DELETE")
                .uri("/api/acronym/999")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_non_numeric_path_id_is_422() {
    let app = test_app().await;

    let response = app
        .oneshot(
            Request::builder()
                .method("DELETE")
                .uri("/api/acronym/abc")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

// =============================================================================
// Listing
// =============================================================================

#[tokio::test]
async fn test_listing_reports_total_count() {
    let app = test_app().await;
    seed(&app).await;

    let response = app.clone().oneshot(get("/api/acronym?limit=2")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(response.headers()["x-total-count"], "3");
    assert_eq!(body_json(response).await.as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn test_filters_combine_with_or() {
    let app = test_app().await;
    seed(&app).await;

    // abbreviation only
    let response = app
        .clone()
        .oneshot(get("/api/acronym?abbreviation=DM"))
        .await
        .unwrap();
    assert_eq!(body_json(response).await.as_array().unwrap().len(), 2);

    // both filters: AM rows plus Message rows, a union not an intersection
    let response = app
        .clone()
        .oneshot(get("/api/acronym?abbreviation=AM&phrase=Message"))
        .await
        .unwrap();
    let body = body_json(response).await;
    let phrases: Vec<&str> = body
        .as_array()
        .unwrap()
        .iter()
        .map(|a| a["phrase"].as_str().unwrap())
        .collect();
    assert_eq!(phrases.len(), 2);
    assert!(phrases.contains(&"Ante Meridiem"));
    assert!(phrases.contains(&"Direct Message"));
}

#[tokio::test]
async fn test_ordering_by_phrase() {
    let app = test_app().await;
    seed(&app).await;

    let response = app
        .clone()
        .oneshot(get("/api/acronym?order=phrase"))
        .await
        .unwrap();
    let body = body_json(response).await;
    let phrases: Vec<&str> = body
        .as_array()
        .unwrap()
        .iter()
        .map(|a| a["phrase"].as_str().unwrap())
        .collect();
    assert_eq!(phrases, vec!["Ante Meridiem", "Data Mining", "Direct Message"]);
}

#[tokio::test]
async fn test_unknown_order_column_is_422() {
    let app = test_app().await;

    let response = app.oneshot(get("/api/acronym?order=rowid")).await.unwrap();
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn test_limit_bounds() {
    let app = test_app().await;

    for uri in [
        "/api/acronym?limit=0",
        "/api/acronym?limit=51",
        "/api/acronym?limit=100",
        "/api/acronym?limit=-3",
        "/api/acronym?limit=abc",
        "/api/acronym?offset=-1",
    ] {
        let response = app.clone().oneshot(get(uri)).await.unwrap();
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY, "{uri}");
    }

    let response = app.clone().oneshot(get("/api/acronym?limit=50")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_offset_past_end_is_an_empty_page() {
    let app = test_app().await;
    seed(&app).await;

    let response = app
        .clone()
        .oneshot(get("/api/acronym?offset=100"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(response.headers()["x-total-count"], "3");
    assert_eq!(body_json(response).await, json!([]));
}

// =============================================================================
// Cache Invalidation
// =============================================================================

#[tokio::test]
async fn test_writes_invalidate_cached_listings() {
    let app = test_app().await;
    seed(&app).await;

    // Prime the cache
    let response = app.clone().oneshot(get("/api/acronym")).await.unwrap();
    assert_eq!(body_json(response).await.as_array().unwrap().len(), 3);

    // A write must drop the cached page
    create(&app, "PM", "Post Meridiem").await;

    let response = app.clone().oneshot(get("/api/acronym")).await.unwrap();
    assert_eq!(response.headers()["x-total-count"], "4");
    assert_eq!(body_json(response).await.as_array().unwrap().len(), 4);
}

#[tokio::test]
async fn test_delete_invalidates_cached_lookup() {
    let app = test_app().await;
    let (am, _, _) = seed(&app).await;

    // Prime the id lookup cache
    let response = app
        .clone()
        .oneshot(get(&format!("/api/acronym?id={am}")))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    app.clone()
        .oneshot(
            Request::builder()
                .method("DELETE")
                .uri(format!("/api/acronym/{am}"))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    let response = app
        .clone()
        .oneshot(get(&format!("/api/acronym?id={am}")))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

// =============================================================================
// Accounts
// =============================================================================

async fn register(app: &Router, email: &str, password: &str) -> axum::response::Response {
    app.clone()
        .oneshot(json_request(
            "POST",
            "/auth/register",
            json!({ "email": email, "password": password }),
        ))
        .await
        .unwrap()
}

async fn login_token(app: &Router, email: &str, password: &str) -> String {
    let response = app
        .clone()
        .oneshot(json_request(
            "POST",
            "/auth/login",
            json!({ "email": email, "password": password }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["token_type"], json!("bearer"));
    body["access_token"].as_str().unwrap().to_string()
}

#[tokio::test]
async fn test_register_login_me_logout_flow() {
    let app = test_app().await;

    let response = register(&app, "alice@example.com", "hunter2").await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let body = body_json(response).await;
    assert_eq!(body["email"], json!("alice@example.com"));
    assert_eq!(body["is_verified"], json!(false));
    assert!(body.get("hashed_password").is_none());

    let token = login_token(&app, "alice@example.com", "hunter2").await;

    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .uri("/users/me")
                .header(header::AUTHORIZATION, format!("Bearer {token}"))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["email"], json!("alice@example.com"));

    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/auth/logout")
                .header(header::AUTHORIZATION, format!("Bearer {token}"))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    // The token is dead after logout
    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .uri("/users/me")
                .header(header::AUTHORIZATION, format!("Bearer {token}"))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_duplicate_registration_conflicts() {
    let app = test_app().await;

    assert_eq!(
        register(&app, "alice@example.com", "hunter2").await.status(),
        StatusCode::CREATED
    );
    assert_eq!(
        register(&app, "alice@example.com", "other").await.status(),
        StatusCode::CONFLICT
    );
}

#[tokio::test]
async fn test_login_failures_are_uniform_401s() {
    let app = test_app().await;
    register(&app, "alice@example.com", "hunter2").await;

    for body in [
        json!({ "email": "alice@example.com", "password": "wrong" }),
        json!({ "email": "nobody@example.com", "password": "hunter2" }),
    ] {
        let response = app
            .clone()
            .oneshot(json_request("POST", "/auth/login", body))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }
}

#[tokio::test]
async fn test_me_requires_a_token() {
    let app = test_app().await;

    let response = app.clone().oneshot(get("/users/me")).await.unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .uri("/users/me")
                .header(header::AUTHORIZATION, "Bearer not-a-real-token")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_register_validates_credentials() {
    let app = test_app().await;

    for body in [
        json!({ "email": "", "password": "hunter2" }),
        json!({ "email": "not-an-address", "password": "hunter2" }),
        json!({ "email": "alice@example.com", "password": "" }),
    ] {
        let response = app
            .clone()
            .oneshot(json_request("POST", "/auth/register", body))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }
}

// =============================================================================
// Error Shape
// =============================================================================

#[tokio::test]
async fn test_errors_carry_a_detail_field() {
    let app = test_app().await;

    let response = app.oneshot(get("/api/acronym?id=999")).await.unwrap();
    let body = body_json(response).await;
    assert!(body["detail"].as_str().unwrap().contains("999"));
}
