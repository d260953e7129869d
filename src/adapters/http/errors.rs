use actix_web::{
  HttpResponse,
  error::ResponseError,
  http::{StatusCode, header::ContentType},
};
use std::fmt;

use crate::domain::auth::errors::AuthError;
use crate::domain::auth::value_objects::ValueObjectError as TokenError;
use crate::domain::jobs::JobBoardError;

use super::dtos::ErrorResponse;

/// API error type that maps domain errors to HTTP responses
#[derive(Debug)]
pub enum ApiError {
  /// Malformed or out-of-bounds input (400 Bad Request)
  Validation(String),

  /// The caller has no application for an existing job (400 Bad Request)
  NotApplied { job_title: String },

  /// Authentication or authorization failure (401 / 403)
  Auth(AuthErrorKind),

  /// Referenced resource does not exist (404 Not Found)
  NotFound(ResourceKind),

  /// Uniqueness rule violated (409 Conflict)
  Conflict(String),

  /// Internal server error (500 Internal Server Error)
  Internal(String),
}

/// Authentication error kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthErrorKind {
  /// Missing or malformed bearer token (401)
  InvalidToken,

  /// Unknown or expired session (401)
  InvalidSession,

  /// Authenticated but lacking the required role (403)
  Forbidden,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResourceKind {
  Job,
  User,
  Company,
}

impl fmt::Display for ApiError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      ApiError::Validation(msg) => write!(f, "Validation error: {}", msg),
      ApiError::NotApplied { job_title } => write!(f, "No application for job: {}", job_title),
      ApiError::Auth(kind) => write!(f, "Authentication error: {:?}", kind),
      ApiError::NotFound(kind) => write!(f, "Not found: {:?}", kind),
      ApiError::Conflict(msg) => write!(f, "Conflict: {}", msg),
      ApiError::Internal(msg) => write!(f, "Internal error: {}", msg),
    }
  }
}

impl ApiError {
  fn code_and_message(&self) -> (&'static str, String) {
    match self {
      ApiError::Validation(msg) => ("validation_error", msg.clone()),
      ApiError::NotApplied { job_title } => (
        "application_not_found",
        format!("You didn't apply for the {} position", job_title),
      ),
      ApiError::Auth(kind) => match kind {
        AuthErrorKind::InvalidToken => (
          "invalid_token",
          "Invalid or missing authorization token".to_string(),
        ),
        AuthErrorKind::InvalidSession => {
          ("invalid_session", "Invalid or expired session".to_string())
        }
        AuthErrorKind::Forbidden => (
          "forbidden",
          "You are not allowed to perform this action".to_string(),
        ),
      },
      ApiError::NotFound(kind) => match kind {
        ResourceKind::Job => ("job_not_found", "This job doesn't exist".to_string()),
        ResourceKind::User => ("user_not_found", "User not found".to_string()),
        ResourceKind::Company => (
          "company_not_found",
          "Please enter a valid company".to_string(),
        ),
      },
      ApiError::Conflict(msg) => ("already_applied", msg.clone()),
      ApiError::Internal(msg) => {
        // Details stay in the logs
        tracing::error!("Internal error: {}", msg);
        ("internal_error", "Server error".to_string())
      }
    }
  }
}

impl ResponseError for ApiError {
  fn status_code(&self) -> StatusCode {
    match self {
      ApiError::Validation(_) | ApiError::NotApplied { .. } => StatusCode::BAD_REQUEST,
      ApiError::Auth(AuthErrorKind::Forbidden) => StatusCode::FORBIDDEN,
      ApiError::Auth(_) => StatusCode::UNAUTHORIZED,
      ApiError::NotFound(_) => StatusCode::NOT_FOUND,
      ApiError::Conflict(_) => StatusCode::CONFLICT,
      ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
  }

  fn error_response(&self) -> HttpResponse {
    let (error, message) = self.code_and_message();

    HttpResponse::build(self.status_code())
      .content_type(ContentType::json())
      .json(ErrorResponse {
        success: false,
        error: error.to_string(),
        message,
      })
  }
}

impl From<AuthError> for ApiError {
  fn from(error: AuthError) -> Self {
    match error {
      AuthError::InvalidSession => ApiError::Auth(AuthErrorKind::InvalidSession),
      AuthError::UserNotFound => ApiError::NotFound(ResourceKind::User),
      AuthError::ValueObject(TokenError::InvalidToken) => {
        ApiError::Auth(AuthErrorKind::InvalidToken)
      }
      AuthError::ValueObject(err) => ApiError::Internal(err.to_string()),
      AuthError::Repository(err) => ApiError::Internal(format!("Repository error: {}", err)),
    }
  }
}

impl From<JobBoardError> for ApiError {
  fn from(error: JobBoardError) -> Self {
    match error {
      JobBoardError::JobNotFound => ApiError::NotFound(ResourceKind::Job),
      JobBoardError::CompanyNotFound(_) => ApiError::NotFound(ResourceKind::Company),
      JobBoardError::NotApplied { job_title } => ApiError::NotApplied { job_title },
      err @ JobBoardError::AlreadyApplied { .. } => ApiError::Conflict(err.to_string()),
      JobBoardError::Validation(err) => ApiError::Validation(err.to_string()),
      JobBoardError::Repository(err) => ApiError::Internal(format!("Repository error: {}", err)),
    }
  }
}

/// Convert validation errors from validator crate
impl From<validator::ValidationErrors> for ApiError {
  fn from(errors: validator::ValidationErrors) -> Self {
    let mut messages: Vec<String> = errors
      .field_errors()
      .iter()
      .flat_map(|(field, errors)| {
        errors
          .iter()
          .map(|error| {
            error
              .message
              .as_ref()
              .map(|m| m.to_string())
              .unwrap_or_else(|| format!("Invalid field: {}", field))
          })
          .collect::<Vec<_>>()
      })
      .collect();
    messages.sort();

    ApiError::Validation(messages.join(", "))
  }
}
