//! User entity: model, password hashing, registration with the
//! username uniqueness guard.

mod crypto;
mod errors;
mod model;
mod service;

pub use crypto::{hash_password, verify_password};
pub use errors::{UserError, UserResult};
pub use model::User;
pub use service::{UserService, USERS_COLLECTION};
