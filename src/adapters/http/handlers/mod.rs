pub mod applications;
pub mod jobs;
pub mod users;

use crate::{
  adapters::http::errors::{ApiError, AuthErrorKind, ResourceKind},
  domain::auth::entities::User,
};
use actix_web::{HttpMessage, HttpRequest};
use uuid::Uuid;

/// Extract authenticated user from request extensions
pub fn get_user(req: &HttpRequest) -> Result<User, ApiError> {
  let user = req.extensions().get::<User>().cloned();

  if user.is_none() {
    tracing::warn!(
      "get_user: User not found in request extensions for path {}",
      req.path()
    );
  }

  user.ok_or(ApiError::Auth(AuthErrorKind::InvalidSession))
}

/// A job id that is not a UUID cannot name an existing job
pub fn parse_job_id(raw: &str) -> Result<Uuid, ApiError> {
  Uuid::parse_str(raw).map_err(|_| ApiError::NotFound(ResourceKind::Job))
}
