//! Blog creation and listing.
//!
//! Orchestration is strictly validate, then persist, then map the
//! stored document; a failure at any stage short-circuits and leaves
//! the store untouched.

use std::sync::Arc;

use serde_json::Value;

use crate::schema::validate_blog;
use crate::store::DocumentStore;

use super::errors::BlogResult;
use super::model::Blog;

/// Collection holding blog documents
pub const BLOGS_COLLECTION: &str = "blogs";

/// Blog creation handler
pub struct BlogService {
    store: Arc<dyn DocumentStore>,
}

impl BlogService {
    /// Create a service backed by the given store
    pub fn new(store: Arc<dyn DocumentStore>) -> Self {
        Self { store }
    }

    /// Validates the payload and persists a new blog.
    ///
    /// The returned record carries the store-assigned `id` and a
    /// `likes` value that is always present.
    ///
    /// # Errors
    ///
    /// Propagates `ValidationError` for a missing `title` or `url`,
    /// and store failures unchanged.
    pub fn create(&self, payload: &Value) -> BlogResult<Blog> {
        let new_blog = validate_blog(payload)?;
        let stored = self
            .store
            .insert(BLOGS_COLLECTION, Blog::to_document(&new_blog))?;
        Blog::from_document(&stored)
    }

    /// All persisted blogs, in insertion order. Idempotent read.
    pub fn list(&self) -> BlogResult<Vec<Blog>> {
        self.store
            .find_all(BLOGS_COLLECTION)?
            .iter()
            .map(Blog::from_document)
            .collect()
    }
}
