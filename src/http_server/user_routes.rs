//! User HTTP routes.
//!
//! - `POST /api/users` — 200 with the created user (no password
//!   material) as JSON; 400 when `username`/`password` is missing or
//!   the username is taken. The duplicate-username error body carries
//!   the ``expected `username` to be unique`` phrase.

use std::sync::Arc;

use axum::{
    extract::{Json, State},
    http::StatusCode,
    routing::post,
    Router,
};
use serde_json::Value;

use crate::observability::Logger;
use crate::users::{User, UserError};

use super::server::{ApiState, ErrorResponse};

/// User routes with shared state
pub fn user_routes(state: Arc<ApiState>) -> Router {
    Router::new()
        .route("/", post(create_user_handler))
        .with_state(state)
}

/// Register a user
async fn create_user_handler(
    State(state): State<Arc<ApiState>>,
    Json(payload): Json<Value>,
) -> Result<Json<User>, (StatusCode, Json<ErrorResponse>)> {
    match state.users.register(&payload) {
        Ok(user) => Ok(Json(user)),
        Err(e) => {
            let reason = e.to_string();
            Logger::warn("user_create_rejected", &[("reason", reason.as_str())]);
            Err(reject(e))
        }
    }
}

fn reject(e: UserError) -> (StatusCode, Json<ErrorResponse>) {
    let code = e.status_code();
    let status = StatusCode::from_u16(code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
    (status, Json(ErrorResponse::new(e.to_string(), code)))
}
