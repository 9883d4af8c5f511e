//! Record schemas and payload validation for the blog API.
//!
//! # Design principles
//!
//! - Entity shapes are declared once, so validator and store agree on
//!   what "valid" means
//! - Validation happens before any store access
//! - Explicit presence and type checks; no falsiness shortcuts
//! - Defaulting (`likes` to 0) is applied here, observable independent
//!   of the storage choice

mod errors;
mod types;
mod validator;

pub use errors::{ValidationError, ValidationResult};
pub use types::{blog_schema, user_schema, EntitySchema, FieldDef, FieldType};
pub use validator::{validate_blog, validate_user, NewBlog, NewUser};
