//! User API integration tests.
//!
//! Each case starts from a store holding exactly one user
//! (`root`/`sekret`), mirroring the registration contract: fresh
//! usernames succeed with a JSON body, duplicates fail with the
//! uniqueness message, counts stay consistent.

use std::sync::Arc;

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use serde_json::{json, Value};
use tower::ServiceExt;

use bloglist::http_server::{api_router, ApiState};
use bloglist::store::DocumentStore;
use bloglist::users::USERS_COLLECTION;

fn state_with_root_user() -> Arc<ApiState> {
    let state = Arc::new(ApiState::new());
    state.store.delete_all(USERS_COLLECTION).unwrap();
    state
        .users
        .register(&json!({ "username": "root", "password": "sekret" }))
        .unwrap();
    state
}

async fn post_user(state: &Arc<ApiState>, payload: Value) -> axum::response::Response {
    let request = Request::builder()
        .method("POST")
        .uri("/api/users")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(payload.to_string()))
        .unwrap();
    api_router(state.clone()).oneshot(request).await.unwrap()
}

async fn body_json(response: axum::response::Response) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

fn users_in_db(state: &Arc<ApiState>) -> Vec<Value> {
    state.store.find_all(USERS_COLLECTION).unwrap()
}

#[tokio::test]
async fn creation_succeeds_with_a_fresh_username() {
    let state = state_with_root_user();
    let users_at_start = users_in_db(&state);

    let response = post_user(
        &state,
        json!({
            "username": "mluukkai",
            "name": "Matti Luukkainen",
            "password": "salainen"
        }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    let content_type = response
        .headers()
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
        .to_string();
    assert!(content_type.starts_with("application/json"));

    let users_at_end = users_in_db(&state);
    assert_eq!(users_at_end.len(), users_at_start.len() + 1);

    let usernames: Vec<_> = users_at_end
        .iter()
        .map(|u| u["username"].as_str().unwrap())
        .collect();
    assert!(usernames.contains(&"mluukkai"));
}

#[tokio::test]
async fn created_user_body_carries_no_password_material() {
    let state = state_with_root_user();

    let response = post_user(
        &state,
        json!({ "username": "mluukkai", "password": "salainen" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    assert_eq!(body["username"], "mluukkai");
    assert!(body.get("id").is_some());
    assert!(body.get("password").is_none());
    assert!(body.get("password_hash").is_none());
}

#[tokio::test]
async fn creation_fails_if_username_already_taken() {
    let state = state_with_root_user();
    let users_at_start = users_in_db(&state);

    let response = post_user(
        &state,
        json!({
            "username": "root",
            "name": "Superuser",
            "password": "salainen"
        }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = body_json(response).await;
    let error = body["error"].as_str().unwrap();
    assert!(error.contains("`username` to be unique"));

    assert_eq!(users_in_db(&state).len(), users_at_start.len());
}

#[tokio::test]
async fn creation_fails_without_username() {
    let state = state_with_root_user();
    let users_at_start = users_in_db(&state);

    let response = post_user(&state, json!({ "password": "salainen" })).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = body_json(response).await;
    assert!(body["error"]
        .as_str()
        .unwrap()
        .contains("missing required field"));
    assert_eq!(users_in_db(&state).len(), users_at_start.len());
}

#[tokio::test]
async fn creation_fails_without_password() {
    let state = state_with_root_user();
    let users_at_start = users_in_db(&state);

    let response = post_user(&state, json!({ "username": "mluukkai" })).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(users_in_db(&state).len(), users_at_start.len());
}

#[tokio::test]
async fn stored_documents_never_hold_the_raw_password() {
    let state = state_with_root_user();

    for doc in users_in_db(&state) {
        assert!(doc.get("password").is_none());
        assert_ne!(doc["password_hash"], "sekret");
    }
}
