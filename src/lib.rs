//! bloglist - A minimal blog-posting HTTP API backed by a document store
//!
//! Creates and lists blog entries and registers users with unique
//! usernames. The core is the validation and uniqueness-enforcement
//! layer between the HTTP surface and an injected document store.

pub mod blogs;
pub mod cli;
pub mod http_server;
pub mod observability;
pub mod schema;
pub mod store;
pub mod users;
