pub mod auth;
pub mod request_id;
pub mod role;

pub use auth::AuthMiddleware;
pub use request_id::{RequestId, RequestIdExt, RequestIdMiddleware};
pub use role::RequireRole;
