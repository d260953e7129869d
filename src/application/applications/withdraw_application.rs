use std::sync::Arc;
use uuid::Uuid;

use crate::domain::jobs::{JobBoardError, JobBoardService};

#[derive(Debug, Clone)]
pub struct WithdrawApplicationCommand {
  pub job_id: Uuid,
  pub applicant_id: Uuid,
}

#[derive(Debug, Clone)]
pub struct WithdrawApplicationResponse {
  pub job_title: String,
}

pub struct WithdrawApplicationUseCase {
  job_board_service: Arc<JobBoardService>,
}

impl WithdrawApplicationUseCase {
  pub fn new(job_board_service: Arc<JobBoardService>) -> Self {
    Self { job_board_service }
  }

  pub async fn execute(
    &self,
    command: WithdrawApplicationCommand,
  ) -> Result<WithdrawApplicationResponse, JobBoardError> {
    let job = self
      .job_board_service
      .withdraw(command.job_id, command.applicant_id)
      .await?;

    tracing::info!(
      job_id = %job.id,
      applicant_id = %command.applicant_id,
      "Application withdrawn"
    );

    Ok(WithdrawApplicationResponse {
      job_title: job.title,
    })
  }
}
