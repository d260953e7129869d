use thiserror::Error;

use super::value_objects::ValueObjectError;
use crate::domain::auth::errors::RepositoryError;
use crate::domain::company::CompanyError;

#[derive(Debug, Error)]
pub enum JobBoardError {
  #[error("This job doesn't exist")]
  JobNotFound,

  #[error("Company '{0}' does not exist")]
  CompanyNotFound(String),

  #[error("You didn't apply for the {job_title} position")]
  NotApplied { job_title: String },

  #[error("You already applied for the {job_title} position")]
  AlreadyApplied { job_title: String },

  #[error("Validation error: {0}")]
  Validation(#[from] ValueObjectError),

  #[error("Repository error: {0}")]
  Repository(#[from] RepositoryError),
}

impl From<CompanyError> for JobBoardError {
  fn from(error: CompanyError) -> Self {
    match error {
      CompanyError::Repository(e) => JobBoardError::Repository(e),
      other => JobBoardError::Repository(RepositoryError::QueryFailed(other.to_string())),
    }
  }
}

impl From<sqlx::Error> for JobBoardError {
  fn from(error: sqlx::Error) -> Self {
    JobBoardError::Repository(RepositoryError::from(error))
  }
}
