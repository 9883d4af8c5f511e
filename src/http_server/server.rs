//! HTTP server wiring.
//!
//! Owns the shared API state (one store, one service per entity) and
//! combines the per-entity routers under `/api`.

use std::io;
use std::net::SocketAddr;
use std::sync::Arc;

use axum::Router;
use serde::Serialize;
use tokio::net::TcpListener;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};

use crate::blogs::BlogService;
use crate::observability::Logger;
use crate::store::{DocumentStore, MemoryStore};
use crate::users::{UserService, USERS_COLLECTION};

use super::blog_routes::blog_routes;
use super::config::HttpServerConfig;
use super::user_routes::user_routes;

/// Shared state behind all API handlers
pub struct ApiState {
    pub blogs: BlogService,
    pub users: UserService,
    /// Exposed for test setup (seeding, bulk clears); the HTTP surface
    /// never reaches it directly
    pub store: Arc<dyn DocumentStore>,
}

impl ApiState {
    /// State over a fresh in-memory store with the username unique index
    pub fn new() -> Self {
        let store =
            MemoryStore::new().with_unique_index(USERS_COLLECTION, "username");
        Self::with_store(Arc::new(store))
    }

    /// State over an injected store
    pub fn with_store(store: Arc<dyn DocumentStore>) -> Self {
        Self {
            blogs: BlogService::new(store.clone()),
            users: UserService::new(store.clone()),
            store,
        }
    }
}

impl Default for ApiState {
    fn default() -> Self {
        Self::new()
    }
}

/// Client-facing error body
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub code: u16,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>, code: u16) -> Self {
        Self {
            error: error.into(),
            code,
        }
    }
}

/// The complete API router over the given state
pub fn api_router(state: Arc<ApiState>) -> Router {
    Router::new()
        .nest("/api/blogs", blog_routes(state.clone()))
        .nest("/api/users", user_routes(state))
}

/// HTTP server for the blog API
pub struct HttpServer {
    config: HttpServerConfig,
    router: Router,
}

impl HttpServer {
    /// Create a new server with default configuration
    pub fn new() -> Self {
        Self::with_config(HttpServerConfig::default())
    }

    /// Create a new server with custom configuration
    pub fn with_config(config: HttpServerConfig) -> Self {
        let cors = if config.cors_origins.is_empty() {
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any)
        } else {
            let origins: Vec<_> = config
                .cors_origins
                .iter()
                .filter_map(|s| s.parse().ok())
                .collect();
            CorsLayer::new()
                .allow_origin(AllowOrigin::list(origins))
                .allow_methods(Any)
                .allow_headers(Any)
        };

        let router = api_router(Arc::new(ApiState::new())).layer(cors);
        Self { config, router }
    }

    /// Get the socket address
    pub fn socket_addr(&self) -> String {
        self.config.socket_addr()
    }

    /// Get the router (for testing)
    pub fn router(self) -> Router {
        self.router
    }

    /// Bind and serve until the process exits
    pub async fn start(self) -> Result<(), io::Error> {
        let addr: SocketAddr = self
            .config
            .socket_addr()
            .parse()
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidInput, e))?;

        let listener = TcpListener::bind(addr).await?;
        let bound = addr.to_string();
        Logger::info("http_server_started", &[("addr", bound.as_str())]);
        axum::serve(listener, self.router).await?;

        Ok(())
    }
}

impl Default for HttpServer {
    fn default() -> Self {
        Self::new()
    }
}
