use std::sync::Arc;
use uuid::Uuid;

use crate::domain::jobs::{Application, JobBoardError, JobBoardService};

#[derive(Debug, Clone)]
pub struct ListMyApplicationsCommand {
  pub applicant_id: Uuid,
}

pub struct ListMyApplicationsUseCase {
  job_board_service: Arc<JobBoardService>,
}

impl ListMyApplicationsUseCase {
  pub fn new(job_board_service: Arc<JobBoardService>) -> Self {
    Self { job_board_service }
  }

  pub async fn execute(
    &self,
    command: ListMyApplicationsCommand,
  ) -> Result<Vec<Application>, JobBoardError> {
    self
      .job_board_service
      .applications_of(command.applicant_id)
      .await
  }
}
