use std::sync::Arc;
use uuid::Uuid;

use crate::domain::jobs::{Application, ApplicationDocuments, JobBoardError, JobBoardService};

#[derive(Debug, Clone)]
pub struct SubmitApplicationCommand {
  pub job_id: Uuid,
  pub applicant_id: Uuid,
  pub resume: String,
  pub cover_letter: String,
}

#[derive(Debug, Clone)]
pub struct SubmitApplicationResponse {
  pub job_title: String,
  pub application: Application,
}

pub struct SubmitApplicationUseCase {
  job_board_service: Arc<JobBoardService>,
}

impl SubmitApplicationUseCase {
  pub fn new(job_board_service: Arc<JobBoardService>) -> Self {
    Self { job_board_service }
  }

  pub async fn execute(
    &self,
    command: SubmitApplicationCommand,
  ) -> Result<SubmitApplicationResponse, JobBoardError> {
    let documents = ApplicationDocuments::new(command.resume, command.cover_letter)?;

    let (job, application) = self
      .job_board_service
      .apply(command.job_id, command.applicant_id, documents)
      .await?;

    tracing::info!(
      application_id = %application.id,
      job_id = %job.id,
      applicant_id = %application.applicant_id,
      "Application submitted"
    );

    Ok(SubmitApplicationResponse {
      job_title: job.title,
      application,
    })
  }
}
