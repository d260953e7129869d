use std::sync::Arc;
use uuid::Uuid;

use crate::domain::jobs::{Application, JobBoardError, JobBoardService};

#[derive(Debug, Clone)]
pub struct GetApplicationCommand {
  pub job_id: Uuid,
  pub applicant_id: Uuid,
}

#[derive(Debug, Clone)]
pub struct GetApplicationResponse {
  pub job_title: String,
  pub application: Application,
}

pub struct GetApplicationUseCase {
  job_board_service: Arc<JobBoardService>,
}

impl GetApplicationUseCase {
  pub fn new(job_board_service: Arc<JobBoardService>) -> Self {
    Self { job_board_service }
  }

  /// # Errors
  /// `JobBoardError::JobNotFound` if the job is gone, `JobBoardError::NotApplied`
  /// if the caller has no application for it
  pub async fn execute(
    &self,
    command: GetApplicationCommand,
  ) -> Result<GetApplicationResponse, JobBoardError> {
    let (job, application) = self
      .job_board_service
      .get_application(command.job_id, command.applicant_id)
      .await?;

    Ok(GetApplicationResponse {
      job_title: job.title,
      application,
    })
  }
}
