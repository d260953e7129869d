use std::sync::Arc;

use crate::domain::jobs::{Job, JobBoardError, JobBoardService};

pub struct ListJobsResponse {
  pub jobs: Vec<Job>,
}

pub struct ListJobsUseCase {
  job_board_service: Arc<JobBoardService>,
}

impl ListJobsUseCase {
  pub fn new(job_board_service: Arc<JobBoardService>) -> Self {
    Self { job_board_service }
  }

  pub async fn execute(&self) -> Result<ListJobsResponse, JobBoardError> {
    let jobs = self.job_board_service.list_jobs().await.map_err(|e| {
      tracing::error!("Failed to list jobs: {}", e);
      e
    })?;

    Ok(ListJobsResponse { jobs })
  }
}
