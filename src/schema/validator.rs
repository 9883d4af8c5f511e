//! Payload validation for blog and user creation.
//!
//! Validation semantics:
//! - Required fields (per the entity schemas) must be present and
//!   non-empty
//! - `likes` defaults to 0 unless it is a non-negative integer
//! - Validators are pure: no store access, no side effects
//!
//! Uniqueness is deliberately not checked here; that belongs to the
//! store-backed guard in the user service.

use serde_json::{Map, Value};

use super::errors::{ValidationError, ValidationResult};
use super::types::{blog_schema, user_schema, EntitySchema};

/// Normalized blog-creation record produced by [`validate_blog`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewBlog {
    pub title: String,
    pub author: Option<String>,
    pub url: String,
    /// Always present after validation; defaulted to 0 when the payload
    /// omits it or carries a non-integer value
    pub likes: u64,
}

/// Normalized user-creation record produced by [`validate_user`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUser {
    pub username: String,
    pub name: Option<String>,
    /// Raw password; hashed by the user service before persistence
    pub password: String,
}

/// Validates a blog-creation payload.
///
/// Succeeds when `title` and `url` are present, string-typed, and
/// non-empty. `author` is carried through when it is a non-empty string.
///
/// # Errors
///
/// Returns `ValidationError::MissingField` naming the first absent or
/// empty required field, or `ValidationError::NotAnObject` when the
/// payload is not a JSON object.
pub fn validate_blog(payload: &Value) -> ValidationResult<NewBlog> {
    let obj = check_against(&blog_schema(), payload)?;

    let title = required_string(obj, "title")?;
    let url = required_string(obj, "url")?;
    let author = optional_string(obj.get("author"));

    // Explicit is-integer check: absent, string, float, or negative
    // values all normalize to 0 rather than being conflated with
    // "missing" by a falsiness test.
    let likes = obj.get("likes").and_then(Value::as_u64).unwrap_or(0);

    Ok(NewBlog {
        title,
        author,
        url,
        likes,
    })
}

/// Validates a user-creation payload.
///
/// Succeeds when `username` and `password` are present and non-empty.
/// Username uniqueness is not checked here.
///
/// # Errors
///
/// Returns `ValidationError::MissingField` for an absent or empty
/// `username` or `password`.
pub fn validate_user(payload: &Value) -> ValidationResult<NewUser> {
    let obj = check_against(&user_schema(), payload)?;

    let username = required_string(obj, "username")?;
    let password = required_string(obj, "password")?;
    let name = optional_string(obj.get("name"));

    Ok(NewUser {
        username,
        name,
        password,
    })
}

/// Checks the payload shape against an entity schema: it must be an
/// object, and every required field must be present and non-empty.
fn check_against<'a>(
    schema: &EntitySchema,
    payload: &'a Value,
) -> ValidationResult<&'a Map<String, Value>> {
    let obj = payload.as_object().ok_or(ValidationError::NotAnObject)?;
    for name in schema.required_fields() {
        let present = matches!(
            obj.get(name).and_then(Value::as_str),
            Some(s) if !s.is_empty()
        );
        if !present {
            return Err(ValidationError::MissingField(name.to_string()));
        }
    }
    Ok(obj)
}

/// Extracts a required non-empty string field
fn required_string(obj: &Map<String, Value>, field: &str) -> ValidationResult<String> {
    match obj.get(field).and_then(Value::as_str) {
        Some(s) if !s.is_empty() => Ok(s.to_string()),
        _ => Err(ValidationError::MissingField(field.to_string())),
    }
}

/// Extracts an optional string field; empty strings collapse to None
fn optional_string(value: Option<&Value>) -> Option<String> {
    value
        .and_then(Value::as_str)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}
