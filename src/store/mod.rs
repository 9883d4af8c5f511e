//! Document store capability.
//!
//! The services in this crate never talk to a concrete database; they
//! are handed a [`DocumentStore`] and stay testable without one. The
//! store owns id assignment (under the native `_id` key, which callers
//! translate to the client-facing `id`) and enforces declared unique
//! indexes at insert time.

mod errors;
mod memory;

pub use errors::{StoreError, StoreResult};
pub use memory::MemoryStore;

use serde_json::Value;

/// Native primary-key field name used inside stored documents.
///
/// Never exposed to API clients; models remap it to `id`.
pub const NATIVE_ID_FIELD: &str = "_id";

/// Storage capability injected into the services.
///
/// Implementations must assign a unique opaque id under
/// [`NATIVE_ID_FIELD`] on insert and reject inserts that violate a
/// declared unique index.
pub trait DocumentStore: Send + Sync {
    /// Persist a document, assigning its id. Returns the stored document.
    fn insert(&self, collection: &str, document: Value) -> StoreResult<Value>;

    /// All documents in a collection, in insertion order
    fn find_all(&self, collection: &str) -> StoreResult<Vec<Value>>;

    /// First document whose `field` equals `value`, if any
    fn find_by_field(
        &self,
        collection: &str,
        field: &str,
        value: &Value,
    ) -> StoreResult<Option<Value>>;

    /// Remove every document in a collection. Test-setup only; not
    /// reachable from the HTTP surface.
    fn delete_all(&self, collection: &str) -> StoreResult<()>;
}
