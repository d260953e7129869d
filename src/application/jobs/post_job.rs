use rust_decimal::Decimal;
use std::sync::Arc;
use uuid::Uuid;

use crate::domain::jobs::{JobBoardError, JobBoardService, JobPosting, Salary};

#[derive(Debug, Clone)]
pub struct PostJobCommand {
  pub title: String,
  pub description: String,
  pub requirements: String,
  pub location: String,
  pub salary: Decimal,
  pub company: String,
}

#[derive(Debug, Clone)]
pub struct PostJobResponse {
  pub job_id: Uuid,
}

/// Publishes a job on behalf of an existing company
pub struct PostJobUseCase {
  job_board_service: Arc<JobBoardService>,
}

impl PostJobUseCase {
  pub fn new(job_board_service: Arc<JobBoardService>) -> Self {
    Self { job_board_service }
  }

  /// # Errors
  /// `JobBoardError::CompanyNotFound` when the company is unknown; nothing is stored then
  pub async fn execute(&self, command: PostJobCommand) -> Result<PostJobResponse, JobBoardError> {
    let posting = JobPosting {
      title: command.title.trim().to_string(),
      description: command.description,
      requirements: command.requirements,
      location: command.location.trim().to_string(),
      salary: Salary::new(command.salary)?,
      company: command.company.trim().to_string(),
    };

    let job = self.job_board_service.post_job(posting).await?;

    tracing::info!(job_id = %job.id, company = %job.company, "Job posted");

    Ok(PostJobResponse { job_id: job.id })
  }
}
