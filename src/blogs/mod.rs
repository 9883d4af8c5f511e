//! Blog entity: model, creation handler, listing.

mod errors;
mod model;
mod service;

pub use errors::{BlogError, BlogResult};
pub use model::Blog;
pub use service::{BlogService, BLOGS_COLLECTION};
