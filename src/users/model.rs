//! User record model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use uuid::Uuid;

use crate::schema::NewUser;
use crate::store::NATIVE_ID_FIELD;

use super::errors::{UserError, UserResult};

/// A persisted user record.
///
/// `password_hash` never serializes into responses; raw passwords are
/// never stored at all.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    /// Unique user identifier
    pub id: Uuid,

    /// Unique username (case-sensitive exact match)
    pub username: String,

    /// Display name, when given
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Argon2id password hash (never plaintext)
    #[serde(skip_serializing)]
    pub password_hash: String,

    /// When the record was persisted
    pub created_at: DateTime<Utc>,
}

impl User {
    /// Builds the document persisted for a validated creation record.
    ///
    /// Takes the already-computed hash; the raw password from the
    /// creation record must not reach the store.
    pub fn to_document(new_user: &NewUser, password_hash: &str) -> Value {
        let mut doc = json!({
            "username": new_user.username,
            "password_hash": password_hash,
        });
        if let Some(name) = &new_user.name {
            doc["name"] = Value::String(name.clone());
        }
        doc
    }

    /// Maps a stored document back to the record shape.
    ///
    /// # Errors
    ///
    /// Returns `UserError::MalformedDocument` when fields the schema
    /// guarantees are absent or mistyped.
    pub fn from_document(doc: &Value) -> UserResult<Self> {
        let id = doc
            .get(NATIVE_ID_FIELD)
            .and_then(Value::as_str)
            .and_then(|s| Uuid::parse_str(s).ok())
            .ok_or(UserError::MalformedDocument)?;
        let username = doc
            .get("username")
            .and_then(Value::as_str)
            .ok_or(UserError::MalformedDocument)?
            .to_string();
        let password_hash = doc
            .get("password_hash")
            .and_then(Value::as_str)
            .ok_or(UserError::MalformedDocument)?
            .to_string();
        let name = doc.get("name").and_then(Value::as_str).map(str::to_string);
        let created_at = doc
            .get("created_at")
            .and_then(Value::as_str)
            .and_then(|s| DateTime::parse_from_rfc3339(s).ok())
            .map(|t| t.with_timezone(&Utc))
            .ok_or(UserError::MalformedDocument)?;

        Ok(Self {
            id,
            username,
            name,
            password_hash,
            created_at,
        })
    }
}
