use std::sync::Arc;
use uuid::Uuid;

use crate::domain::auth::errors::RepositoryError;
use crate::domain::company::ports::CompanyRepository;

use super::entities::{Application, Job, JobPosting};
use super::errors::JobBoardError;
use super::ports::{ApplicationRepository, JobRepository};
use super::value_objects::ApplicationDocuments;

/// Job board service: job postings and the per-(job, applicant) application lifecycle
pub struct JobBoardService {
  job_repo: Arc<dyn JobRepository>,
  application_repo: Arc<dyn ApplicationRepository>,
  company_repo: Arc<dyn CompanyRepository>,
}

impl JobBoardService {
  pub fn new(
    job_repo: Arc<dyn JobRepository>,
    application_repo: Arc<dyn ApplicationRepository>,
    company_repo: Arc<dyn CompanyRepository>,
  ) -> Self {
    Self {
      job_repo,
      application_repo,
      company_repo,
    }
  }

  // Job operations

  pub async fn list_jobs(&self) -> Result<Vec<Job>, JobBoardError> {
    self.job_repo.list_all().await
  }

  /// Publish a job for an existing company
  pub async fn post_job(&self, posting: JobPosting) -> Result<Job, JobBoardError> {
    if self
      .company_repo
      .find_by_name(&posting.company)
      .await?
      .is_none()
    {
      return Err(JobBoardError::CompanyNotFound(posting.company));
    }

    let company = posting.company.clone();
    match self.job_repo.create(Job::new(posting)).await {
      Ok(job) => Ok(job),
      // Company removed between the check and the insert
      Err(JobBoardError::Repository(RepositoryError::ForeignKey(_))) => {
        Err(JobBoardError::CompanyNotFound(company))
      }
      Err(e) => Err(e),
    }
  }

  pub async fn find_job(&self, job_id: Uuid) -> Result<Job, JobBoardError> {
    self
      .job_repo
      .find_by_id(job_id)
      .await?
      .ok_or(JobBoardError::JobNotFound)
  }

  // Application operations

  /// Get the applicant's application for a job
  pub async fn get_application(
    &self,
    job_id: Uuid,
    applicant_id: Uuid,
  ) -> Result<(Job, Application), JobBoardError> {
    let job = self.find_job(job_id).await?;

    match self
      .application_repo
      .find_for_job(job.id, applicant_id)
      .await?
    {
      Some(application) => Ok((job, application)),
      None => Err(JobBoardError::NotApplied {
        job_title: job.title,
      }),
    }
  }

  /// Apply to a job; at most one application per (job, applicant)
  pub async fn apply(
    &self,
    job_id: Uuid,
    applicant_id: Uuid,
    documents: ApplicationDocuments,
  ) -> Result<(Job, Application), JobBoardError> {
    let job = self.find_job(job_id).await?;

    if self
      .application_repo
      .find_for_job(job.id, applicant_id)
      .await?
      .is_some()
    {
      return Err(JobBoardError::AlreadyApplied {
        job_title: job.title,
      });
    }

    let application = Application::new(job.id, applicant_id, documents);
    match self.application_repo.create(application).await {
      Ok(created) => Ok((job, created)),
      // Lost a race against a concurrent application for the same pair
      Err(JobBoardError::Repository(RepositoryError::DuplicateKey(_))) => {
        Err(JobBoardError::AlreadyApplied {
          job_title: job.title,
        })
      }
      Err(e) => Err(e),
    }
  }

  /// Withdraw the applicant's application for a job
  pub async fn withdraw(&self, job_id: Uuid, applicant_id: Uuid) -> Result<Job, JobBoardError> {
    let (job, application) = self.get_application(job_id, applicant_id).await?;
    self.application_repo.delete(application.id).await?;
    Ok(job)
  }

  pub async fn applications_of(&self, applicant_id: Uuid) -> Result<Vec<Application>, JobBoardError> {
    self.application_repo.find_by_applicant(applicant_id).await
  }

  /// Cancel every application of the applicant; returns how many were removed
  pub async fn cancel_all(&self, applicant_id: Uuid) -> Result<u64, JobBoardError> {
    self.application_repo.delete_by_applicant(applicant_id).await
  }
}
