pub mod entities;
pub mod errors;
pub mod ports;
pub mod services;
pub mod value_objects;

// Re-export commonly used types
pub use entities::{Session, User, UserRole};
pub use errors::{AuthError, RepositoryError};
pub use value_objects::{SessionToken, TokenHash, ValueObjectError};
