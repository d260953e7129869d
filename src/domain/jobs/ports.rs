use async_trait::async_trait;
use uuid::Uuid;

use super::entities::{Application, Job};
use super::errors::JobBoardError;

#[async_trait]
pub trait JobRepository: Send + Sync {
  async fn create(&self, job: Job) -> Result<Job, JobBoardError>;
  async fn find_by_id(&self, id: Uuid) -> Result<Option<Job>, JobBoardError>;
  async fn list_all(&self) -> Result<Vec<Job>, JobBoardError>;
}

#[async_trait]
pub trait ApplicationRepository: Send + Sync {
  /// Inserts a new application; a second application for the same
  /// (job, applicant) pair fails with `RepositoryError::DuplicateKey`
  async fn create(&self, application: Application) -> Result<Application, JobBoardError>;

  async fn find_for_job(
    &self,
    job_id: Uuid,
    applicant_id: Uuid,
  ) -> Result<Option<Application>, JobBoardError>;

  async fn find_by_applicant(&self, applicant_id: Uuid) -> Result<Vec<Application>, JobBoardError>;

  async fn delete(&self, id: Uuid) -> Result<(), JobBoardError>;

  /// Returns the number of deleted applications
  async fn delete_by_applicant(&self, applicant_id: Uuid) -> Result<u64, JobBoardError>;
}
