//! User registration with the username uniqueness guard.

use std::sync::Arc;

use serde_json::Value;

use crate::schema::validate_user;
use crate::store::{DocumentStore, StoreError};

use super::crypto;
use super::errors::UserResult;
use super::model::User;

/// Collection holding user documents
pub const USERS_COLLECTION: &str = "users";

/// User creation handler
pub struct UserService {
    store: Arc<dyn DocumentStore>,
}

impl UserService {
    /// Create a service backed by the given store.
    ///
    /// The store is expected to carry a unique index on
    /// `users.username`; the guard's pre-check exists for its
    /// client-visible error message, not as the sole enforcement.
    pub fn new(store: Arc<dyn DocumentStore>) -> Self {
        Self { store }
    }

    /// Validates the payload, enforces username uniqueness, hashes the
    /// password, and persists the user.
    ///
    /// # Errors
    ///
    /// Propagates `ValidationError` for a missing `username` or
    /// `password`, and fails with a duplicate-key error whose message
    /// contains ``expected `username` to be unique`` when the username
    /// is already taken.
    pub fn register(&self, payload: &Value) -> UserResult<User> {
        let new_user = validate_user(payload)?;

        let username = Value::String(new_user.username.clone());
        if self
            .store
            .find_by_field(USERS_COLLECTION, "username", &username)?
            .is_some()
        {
            return Err(StoreError::duplicate_key("username").into());
        }

        let password_hash = crypto::hash_password(&new_user.password)?;
        let stored = self
            .store
            .insert(USERS_COLLECTION, User::to_document(&new_user, &password_hash))?;
        User::from_document(&stored)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::ValidationError;
    use crate::store::MemoryStore;
    use serde_json::json;

    fn service_with_store() -> (UserService, Arc<MemoryStore>) {
        let store =
            Arc::new(MemoryStore::new().with_unique_index(USERS_COLLECTION, "username"));
        (UserService::new(store.clone()), store)
    }

    #[test]
    fn test_register_fresh_username() {
        let (service, store) = service_with_store();
        let payload = json!({
            "username": "mluukkai",
            "name": "Matti Luukkainen",
            "password": "salainen"
        });

        let user = service.register(&payload).unwrap();
        assert_eq!(user.username, "mluukkai");

        let usernames: Vec<_> = store
            .find_all(USERS_COLLECTION)
            .unwrap()
            .iter()
            .map(|d| d["username"].as_str().unwrap().to_string())
            .collect();
        assert!(usernames.contains(&"mluukkai".to_string()));
    }

    #[test]
    fn test_register_duplicate_username_fails_with_unique_message() {
        let (service, store) = service_with_store();
        service
            .register(&json!({ "username": "root", "password": "sekret" }))
            .unwrap();

        let err = service
            .register(&json!({ "username": "root", "name": "Superuser", "password": "salainen" }))
            .unwrap_err();

        let message = err.to_string();
        assert!(message.contains("username"));
        assert!(message.contains("unique"));
        assert_eq!(err.status_code(), 400);
        assert_eq!(store.find_all(USERS_COLLECTION).unwrap().len(), 1);
    }

    #[test]
    fn test_register_missing_password_fails() {
        let (service, store) = service_with_store();
        let err = service
            .register(&json!({ "username": "mluukkai" }))
            .unwrap_err();
        assert_eq!(
            err,
            ValidationError::MissingField("password".to_string()).into()
        );
        assert!(store.find_all(USERS_COLLECTION).unwrap().is_empty());
    }

    #[test]
    fn test_raw_password_never_persisted() {
        let (service, store) = service_with_store();
        service
            .register(&json!({ "username": "root", "password": "sekret" }))
            .unwrap();

        let doc = &store.find_all(USERS_COLLECTION).unwrap()[0];
        assert!(doc.get("password").is_none());
        assert_ne!(doc["password_hash"], "sekret");
        assert!(crypto::verify_password("sekret", doc["password_hash"].as_str().unwrap()).unwrap());
    }

    #[test]
    fn test_usernames_are_case_sensitive() {
        let (service, _store) = service_with_store();
        service
            .register(&json!({ "username": "root", "password": "sekret" }))
            .unwrap();
        // Exact-match uniqueness: "Root" is a different username.
        assert!(service
            .register(&json!({ "username": "Root", "password": "sekret" }))
            .is_ok());
    }
}
