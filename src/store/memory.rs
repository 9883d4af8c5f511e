//! In-memory document store.
//!
//! Reference implementation of the [`DocumentStore`] capability. Keeps
//! one `Vec` of documents per collection behind an `RwLock`, assigns
//! UUID ids under the native `_id` key, and enforces declared unique
//! indexes at insert time.

use std::collections::HashMap;
use std::sync::RwLock;

use chrono::Utc;
use serde_json::Value;
use uuid::Uuid;

use super::errors::{StoreError, StoreResult};
use super::{DocumentStore, NATIVE_ID_FIELD};

/// One declared unique index
#[derive(Debug, Clone, PartialEq, Eq)]
struct UniqueIndex {
    collection: String,
    field: String,
}

/// In-memory document store
#[derive(Debug, Default)]
pub struct MemoryStore {
    collections: RwLock<HashMap<String, Vec<Value>>>,
    indexes: Vec<UniqueIndex>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Declare a unique index on `field` within `collection`.
    ///
    /// Inserts that would duplicate an existing value for the field
    /// fail with [`StoreError::DuplicateKey`], closing the window left
    /// by application-level check-then-insert sequences.
    pub fn with_unique_index(
        mut self,
        collection: impl Into<String>,
        field: impl Into<String>,
    ) -> Self {
        self.indexes.push(UniqueIndex {
            collection: collection.into(),
            field: field.into(),
        });
        self
    }

    /// Unique index fields declared for a collection
    fn unique_fields<'a>(&'a self, collection: &'a str) -> impl Iterator<Item = &'a str> + 'a {
        self.indexes
            .iter()
            .filter(move |ix| ix.collection == collection)
            .map(|ix| ix.field.as_str())
    }
}

impl DocumentStore for MemoryStore {
    fn insert(&self, collection: &str, document: Value) -> StoreResult<Value> {
        let mut document = document;
        let obj = document.as_object_mut().ok_or(StoreError::NotAnObject)?;

        obj.insert(
            NATIVE_ID_FIELD.to_string(),
            Value::String(Uuid::new_v4().to_string()),
        );
        obj.insert(
            "created_at".to_string(),
            Value::String(Utc::now().to_rfc3339()),
        );

        let mut collections = self
            .collections
            .write()
            .map_err(|_| StoreError::LockPoisoned)?;
        let docs = collections.entry(collection.to_string()).or_default();

        // Unique-index check and append happen under one write lock,
        // so concurrent identical inserts cannot both pass.
        for field in self.unique_fields(collection) {
            if let Some(candidate) = document.get(field) {
                if docs.iter().any(|d| d.get(field) == Some(candidate)) {
                    return Err(StoreError::duplicate_key(field));
                }
            }
        }

        docs.push(document.clone());
        Ok(document)
    }

    fn find_all(&self, collection: &str) -> StoreResult<Vec<Value>> {
        let collections = self
            .collections
            .read()
            .map_err(|_| StoreError::LockPoisoned)?;
        Ok(collections.get(collection).cloned().unwrap_or_default())
    }

    fn find_by_field(
        &self,
        collection: &str,
        field: &str,
        value: &Value,
    ) -> StoreResult<Option<Value>> {
        let collections = self
            .collections
            .read()
            .map_err(|_| StoreError::LockPoisoned)?;
        Ok(collections
            .get(collection)
            .and_then(|docs| docs.iter().find(|d| d.get(field) == Some(value)))
            .cloned())
    }

    fn delete_all(&self, collection: &str) -> StoreResult<()> {
        let mut collections = self
            .collections
            .write()
            .map_err(|_| StoreError::LockPoisoned)?;
        collections.remove(collection);
        Ok(())
    }
}
