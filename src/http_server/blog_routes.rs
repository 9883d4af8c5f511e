//! Blog HTTP routes.
//!
//! - `GET /api/blogs` — 200, array of all blogs
//! - `POST /api/blogs` — 201 with the created blog; 400 when `title`
//!   or `url` is missing

use std::sync::Arc;

use axum::{
    extract::{Json, State},
    http::StatusCode,
    routing::get,
    Router,
};
use serde_json::Value;

use crate::blogs::{Blog, BlogError};
use crate::observability::Logger;

use super::server::{ApiState, ErrorResponse};

/// Blog routes with shared state
pub fn blog_routes(state: Arc<ApiState>) -> Router {
    Router::new()
        .route("/", get(list_blogs_handler).post(create_blog_handler))
        .with_state(state)
}

/// List all blogs
async fn list_blogs_handler(
    State(state): State<Arc<ApiState>>,
) -> Result<Json<Vec<Blog>>, (StatusCode, Json<ErrorResponse>)> {
    match state.blogs.list() {
        Ok(blogs) => Ok(Json(blogs)),
        Err(e) => Err(reject(e)),
    }
}

/// Create a blog
async fn create_blog_handler(
    State(state): State<Arc<ApiState>>,
    Json(payload): Json<Value>,
) -> Result<(StatusCode, Json<Blog>), (StatusCode, Json<ErrorResponse>)> {
    match state.blogs.create(&payload) {
        Ok(blog) => Ok((StatusCode::CREATED, Json(blog))),
        Err(e) => {
            let reason = e.to_string();
            Logger::warn("blog_create_rejected", &[("reason", reason.as_str())]);
            Err(reject(e))
        }
    }
}

fn reject(e: BlogError) -> (StatusCode, Json<ErrorResponse>) {
    let code = e.status_code();
    let status = StatusCode::from_u16(code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
    (status, Json(ErrorResponse::new(e.to_string(), code)))
}
