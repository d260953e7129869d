use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::{Validate, ValidationError};

use crate::domain::auth::entities::{User, UserRole};
use crate::domain::jobs::{Application, ApplicationStatus, Job, Salary, ValueObjectError};

// Requests

/// Body of `GET /user`
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct GetUserRequest {
  #[validate(length(min = 1, max = 255, message = "Name must be between 1 and 255 characters"))]
  pub name: String,
}

/// Body of `POST /application/{jobId}`
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct SubmitApplicationRequest {
  #[validate(length(
    min = 1,
    max = 20000,
    message = "Resume must be between 1 and 20000 characters"
  ))]
  pub resume: String,

  #[validate(length(
    min = 1,
    max = 10000,
    message = "Cover letter must be between 1 and 10000 characters"
  ))]
  pub cover_letter: String,
}

/// Body of `POST /jobs`
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateJobRequest {
  #[validate(length(min = 1, max = 255, message = "Title must be between 1 and 255 characters"))]
  pub title: String,

  #[validate(length(
    min = 1,
    max = 10000,
    message = "Description must be between 1 and 10000 characters"
  ))]
  pub description: String,

  #[validate(length(
    min = 1,
    max = 10000,
    message = "Requirements must be between 1 and 10000 characters"
  ))]
  pub requirements: String,

  #[validate(length(
    min = 1,
    max = 255,
    message = "Location must be between 1 and 255 characters"
  ))]
  pub location: String,

  /// Accepts a JSON number or a numeric string
  #[validate(custom(function = "validate_salary"))]
  pub salary: Decimal,

  #[validate(length(
    min = 1,
    max = 255,
    message = "Company must be between 1 and 255 characters"
  ))]
  pub company: String,
}

fn validate_salary(salary: &Decimal) -> Result<(), ValidationError> {
  Salary::new(*salary).map(|_| ()).map_err(|err| {
    let code = match err {
      ValueObjectError::NegativeSalary => "negative_salary",
      ValueObjectError::SalaryTooLarge(_) => "salary_too_large",
      _ => "salary_precision",
    };
    ValidationError::new(code).with_message(err.to_string().into())
  })
}

// Resources

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserResponse {
  pub id: Uuid,
  pub name: String,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub email: Option<String>,
  pub role: UserRole,
  pub created_at: DateTime<Utc>,
  pub updated_at: DateTime<Utc>,
}

impl From<User> for UserResponse {
  fn from(user: User) -> Self {
    Self {
      id: user.id,
      name: user.name,
      email: user.email,
      role: user.role,
      created_at: user.created_at,
      updated_at: user.updated_at,
    }
  }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApplicationDto {
  pub id: Uuid,
  /// Applicant user id
  pub applicant: Uuid,
  /// Job id
  pub job: Uuid,
  pub resume: String,
  pub cover_letter: String,
  pub status: ApplicationStatus,
  pub created_at: DateTime<Utc>,
}

impl From<Application> for ApplicationDto {
  fn from(application: Application) -> Self {
    Self {
      id: application.id,
      applicant: application.applicant_id,
      job: application.job_id,
      resume: application.resume,
      cover_letter: application.cover_letter,
      status: application.status,
      created_at: application.created_at,
    }
  }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct JobDto {
  pub id: Uuid,
  pub title: String,
  pub description: String,
  pub requirements: String,
  pub location: String,
  #[serde(with = "rust_decimal::serde::float")]
  pub salary: Decimal,
  pub company: String,
  pub created_at: DateTime<Utc>,
}

impl From<Job> for JobDto {
  fn from(job: Job) -> Self {
    Self {
      id: job.id,
      title: job.title,
      description: job.description,
      requirements: job.requirements,
      location: job.location,
      salary: job.salary,
      company: job.company,
      created_at: job.created_at,
    }
  }
}

// Envelopes

#[derive(Debug, Clone, Serialize)]
pub struct MessageResponse {
  pub message: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct ApplicationResponse {
  pub message: String,
  pub application: ApplicationDto,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmittedApplication {
  pub application: ApplicationDto,
  pub job_title: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmitApplicationResponse {
  pub data_to_be_sent: SubmittedApplication,
  pub message: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct CancelAllResponse {
  pub message: String,
  pub deleted: u64,
}

#[derive(Debug, Clone, Serialize)]
pub struct JobListResponse {
  pub data: Vec<JobDto>,
  pub success: bool,
  pub message: String,
}

/// `{ success, message }` acknowledgement
#[derive(Debug, Clone, Serialize)]
pub struct StatusResponse {
  pub success: bool,
  pub message: String,
}

/// Standard error response
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
  /// Always false
  pub success: bool,

  /// Error type/code
  pub error: String,

  /// Human-readable error message
  pub message: String,
}
