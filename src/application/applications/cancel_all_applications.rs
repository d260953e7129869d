use std::sync::Arc;
use uuid::Uuid;

use crate::domain::jobs::{JobBoardError, JobBoardService};

#[derive(Debug, Clone)]
pub struct CancelAllApplicationsCommand {
  pub applicant_id: Uuid,
}

#[derive(Debug, Clone)]
pub struct CancelAllApplicationsResponse {
  /// Number of applications removed, zero included
  pub deleted: u64,
}

pub struct CancelAllApplicationsUseCase {
  job_board_service: Arc<JobBoardService>,
}

impl CancelAllApplicationsUseCase {
  pub fn new(job_board_service: Arc<JobBoardService>) -> Self {
    Self { job_board_service }
  }

  pub async fn execute(
    &self,
    command: CancelAllApplicationsCommand,
  ) -> Result<CancelAllApplicationsResponse, JobBoardError> {
    let deleted = self
      .job_board_service
      .cancel_all(command.applicant_id)
      .await?;

    tracing::info!(
      applicant_id = %command.applicant_id,
      deleted,
      "Applications canceled"
    );

    Ok(CancelAllApplicationsResponse { deleted })
  }
}
