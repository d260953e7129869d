pub mod dtos;
pub mod errors;
pub mod extractors;
pub mod handlers;
pub mod middleware;
pub mod routes;

// Re-export commonly used types
pub use errors::{ApiError, AuthErrorKind, ResourceKind};
pub use extractors::ValidatedJson;
pub use middleware::{AuthMiddleware, RequestId, RequestIdExt, RequestIdMiddleware, RequireRole};
pub use routes::{
  ApiDependencies, ApplicationRouteDependencies, Repositories, configure_api_routes,
  configure_application_routes, configure_job_routes, configure_user_routes,
};
