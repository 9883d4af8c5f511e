//! HTTP server module.
//!
//! Axum router over the blog API:
//!
//! - `GET /api/blogs` — list blogs
//! - `POST /api/blogs` — create a blog
//! - `POST /api/users` — register a user

pub mod blog_routes;
pub mod config;
pub mod server;
pub mod user_routes;

pub use config::HttpServerConfig;
pub use server::{api_router, ApiState, ErrorResponse, HttpServer};
