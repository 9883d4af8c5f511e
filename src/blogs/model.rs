//! Blog record model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use uuid::Uuid;

use crate::schema::NewBlog;
use crate::store::NATIVE_ID_FIELD;

use super::errors::{BlogError, BlogResult};

/// A persisted blog record.
///
/// The store-assigned identifier is exposed to clients as `id`; the
/// store's native `_id` key never leaves this crate.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Blog {
    /// Unique blog identifier
    pub id: Uuid,

    /// Blog title
    pub title: String,

    /// Author, when given
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,

    /// Link to the entry
    pub url: String,

    /// Like count; defaulted to 0 at validation time when absent
    pub likes: u64,

    /// When the record was persisted
    pub created_at: DateTime<Utc>,
}

impl Blog {
    /// Builds the document persisted for a validated creation record.
    ///
    /// Optional fields are omitted rather than stored as null.
    pub fn to_document(new_blog: &NewBlog) -> Value {
        let mut doc = json!({
            "title": new_blog.title,
            "url": new_blog.url,
            "likes": new_blog.likes,
        });
        if let Some(author) = &new_blog.author {
            doc["author"] = Value::String(author.clone());
        }
        doc
    }

    /// Maps a stored document back to the record shape.
    ///
    /// # Errors
    ///
    /// Returns `BlogError::MalformedDocument` when fields the schema
    /// guarantees are absent or mistyped.
    pub fn from_document(doc: &Value) -> BlogResult<Self> {
        let id = doc
            .get(NATIVE_ID_FIELD)
            .and_then(Value::as_str)
            .and_then(|s| Uuid::parse_str(s).ok())
            .ok_or(BlogError::MalformedDocument)?;
        let title = doc
            .get("title")
            .and_then(Value::as_str)
            .ok_or(BlogError::MalformedDocument)?
            .to_string();
        let url = doc
            .get("url")
            .and_then(Value::as_str)
            .ok_or(BlogError::MalformedDocument)?
            .to_string();
        let likes = doc
            .get("likes")
            .and_then(Value::as_u64)
            .ok_or(BlogError::MalformedDocument)?;
        let author = doc
            .get("author")
            .and_then(Value::as_str)
            .map(str::to_string);
        let created_at = doc
            .get("created_at")
            .and_then(Value::as_str)
            .and_then(|s| DateTime::parse_from_rfc3339(s).ok())
            .map(|t| t.with_timezone(&Utc))
            .ok_or(BlogError::MalformedDocument)?;

        Ok(Self {
            id,
            title,
            author,
            url,
            likes,
            created_at,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_document() -> Value {
        json!({
            "_id": Uuid::new_v4().to_string(),
            "title": "My Resume",
            "author": "Khem Raj Neupane",
            "url": "https://example.com",
            "likes": 5,
            "created_at": Utc::now().to_rfc3339(),
        })
    }

    #[test]
    fn test_from_document_roundtrip() {
        let doc = sample_document();
        let blog = Blog::from_document(&doc).unwrap();
        assert_eq!(blog.title, "My Resume");
        assert_eq!(blog.likes, 5);
        assert_eq!(blog.author.as_deref(), Some("Khem Raj Neupane"));
    }

    #[test]
    fn test_from_document_without_id_fails() {
        let mut doc = sample_document();
        doc.as_object_mut().unwrap().remove("_id");
        assert_eq!(
            Blog::from_document(&doc).unwrap_err(),
            BlogError::MalformedDocument
        );
    }

    #[test]
    fn test_serialization_exposes_id_not_native_key() {
        let blog = Blog::from_document(&sample_document()).unwrap();
        let serialized = serde_json::to_value(&blog).unwrap();
        assert!(serialized.get("id").is_some());
        assert!(serialized.get(NATIVE_ID_FIELD).is_none());
    }

    #[test]
    fn test_to_document_omits_absent_author() {
        let new_blog = NewBlog {
            title: "t".into(),
            author: None,
            url: "u".into(),
            likes: 0,
        };
        let doc = Blog::to_document(&new_blog);
        assert!(doc.get("author").is_none());
        assert_eq!(doc["likes"], 0);
    }
}
