//! Entity schema definitions for the blog API.
//!
//! Supported field types:
//! - string: UTF-8 string, required strings must be non-empty
//! - int: non-negative 64-bit integer
//! - secret: UTF-8 string that must never be persisted verbatim

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Supported field types for entity schemas
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum FieldType {
    /// UTF-8 string
    String,
    /// Non-negative 64-bit integer
    Int,
    /// UTF-8 string holding secret material; hashed before persistence
    Secret,
}

impl FieldType {
    /// Returns the type name for error messages
    pub fn type_name(&self) -> &'static str {
        match self {
            FieldType::String => "string",
            FieldType::Int => "int",
            FieldType::Secret => "secret",
        }
    }
}

/// Field definition: data type plus presence requirement
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldDef {
    /// Field data type
    #[serde(flatten)]
    pub field_type: FieldType,
    /// Whether the field must be present and non-empty
    pub required: bool,
}

impl FieldDef {
    /// Create a required string field
    pub fn required_string() -> Self {
        Self {
            field_type: FieldType::String,
            required: true,
        }
    }

    /// Create an optional string field
    pub fn optional_string() -> Self {
        Self {
            field_type: FieldType::String,
            required: false,
        }
    }

    /// Create an optional int field
    pub fn optional_int() -> Self {
        Self {
            field_type: FieldType::Int,
            required: false,
        }
    }

    /// Create a required secret field
    pub fn required_secret() -> Self {
        Self {
            field_type: FieldType::Secret,
            required: true,
        }
    }
}

/// Complete schema for one entity collection
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntitySchema {
    /// Collection the schema governs
    pub collection: String,
    /// Field definitions, keyed by field name
    pub fields: BTreeMap<String, FieldDef>,
}

impl EntitySchema {
    /// Create a new entity schema
    pub fn new(collection: impl Into<String>, fields: BTreeMap<String, FieldDef>) -> Self {
        Self {
            collection: collection.into(),
            fields,
        }
    }

    /// Names of all required fields, in deterministic order
    pub fn required_fields(&self) -> Vec<&str> {
        self.fields
            .iter()
            .filter(|(_, def)| def.required)
            .map(|(name, _)| name.as_str())
            .collect()
    }
}

/// Schema for the `blogs` collection
pub fn blog_schema() -> EntitySchema {
    let mut fields = BTreeMap::new();
    fields.insert("title".into(), FieldDef::required_string());
    fields.insert("author".into(), FieldDef::optional_string());
    fields.insert("url".into(), FieldDef::required_string());
    fields.insert("likes".into(), FieldDef::optional_int());
    EntitySchema::new("blogs", fields)
}

/// Schema for the `users` collection
pub fn user_schema() -> EntitySchema {
    let mut fields = BTreeMap::new();
    fields.insert("username".into(), FieldDef::required_string());
    fields.insert("name".into(), FieldDef::optional_string());
    fields.insert("password".into(), FieldDef::required_secret());
    EntitySchema::new("users", fields)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blog_schema_required_fields() {
        let schema = blog_schema();
        assert_eq!(schema.required_fields(), vec!["title", "url"]);
    }

    #[test]
    fn test_user_schema_required_fields() {
        let schema = user_schema();
        assert_eq!(schema.required_fields(), vec!["password", "username"]);
    }

    #[test]
    fn test_likes_is_optional_int() {
        let schema = blog_schema();
        let likes = schema.fields.get("likes").unwrap();
        assert_eq!(likes.field_type, FieldType::Int);
        assert!(!likes.required);
    }

    #[test]
    fn test_password_is_secret() {
        let schema = user_schema();
        let password = schema.fields.get("password").unwrap();
        assert_eq!(password.field_type, FieldType::Secret);
        assert!(password.required);
    }

    #[test]
    fn test_field_type_names() {
        assert_eq!(FieldType::String.type_name(), "string");
        assert_eq!(FieldType::Int.type_name(), "int");
        assert_eq!(FieldType::Secret.type_name(), "secret");
    }
}
