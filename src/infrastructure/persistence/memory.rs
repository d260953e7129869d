//! In-memory repositories
//!
//! Implementations of the repository ports backed by a `Mutex<Vec<_>>`. They
//! enforce the same uniqueness rules as the Postgres schema and are used by the
//! test suites.

use async_trait::async_trait;
use std::sync::{Mutex, MutexGuard};
use uuid::Uuid;

use crate::domain::auth::{
  entities::{Session, User},
  errors::{AuthError, RepositoryError},
  ports::{SessionRepository, UserRepository},
};
use crate::domain::company::{Company, CompanyError, CompanyRepository};
use crate::domain::jobs::{
  Application, ApplicationRepository, Job, JobBoardError, JobRepository,
};

fn lock<T>(mutex: &Mutex<Vec<T>>) -> Result<MutexGuard<'_, Vec<T>>, RepositoryError> {
  mutex
    .lock()
    .map_err(|_| RepositoryError::DatabaseError("in-memory store poisoned".to_string()))
}

#[derive(Default)]
pub struct InMemoryUserRepository {
  users: Mutex<Vec<User>>,
}

impl InMemoryUserRepository {
  pub fn new() -> Self {
    Self::default()
  }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
  async fn create(&self, user: User) -> Result<User, AuthError> {
    let mut users = lock(&self.users)?;
    if users.iter().any(|u| u.id == user.id) {
      return Err(RepositoryError::DuplicateKey("users_pkey".to_string()).into());
    }
    users.push(user.clone());
    Ok(user)
  }

  async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, AuthError> {
    Ok(lock(&self.users)?.iter().find(|u| u.id == id).cloned())
  }

  async fn find_by_name(&self, name: &str) -> Result<Option<User>, AuthError> {
    Ok(lock(&self.users)?.iter().find(|u| u.name == name).cloned())
  }

  async fn list_all(&self) -> Result<Vec<User>, AuthError> {
    Ok(lock(&self.users)?.clone())
  }
}

#[derive(Default)]
pub struct InMemorySessionRepository {
  sessions: Mutex<Vec<Session>>,
}

impl InMemorySessionRepository {
  pub fn new() -> Self {
    Self::default()
  }
}

#[async_trait]
impl SessionRepository for InMemorySessionRepository {
  async fn create(&self, session: Session) -> Result<Session, AuthError> {
    let mut sessions = lock(&self.sessions)?;
    if sessions.iter().any(|s| s.token_hash == session.token_hash) {
      return Err(RepositoryError::DuplicateKey("sessions_token_hash_key".to_string()).into());
    }
    sessions.push(session.clone());
    Ok(session)
  }

  async fn find_by_token_hash(&self, token_hash: &str) -> Result<Option<Session>, AuthError> {
    Ok(
      lock(&self.sessions)?
        .iter()
        .find(|s| s.token_hash == token_hash)
        .cloned(),
    )
  }

  async fn delete(&self, session_id: Uuid) -> Result<(), AuthError> {
    lock(&self.sessions)?.retain(|s| s.id != session_id);
    Ok(())
  }
}

#[derive(Default)]
pub struct InMemoryCompanyRepository {
  companies: Mutex<Vec<Company>>,
}

impl InMemoryCompanyRepository {
  pub fn new() -> Self {
    Self::default()
  }
}

#[async_trait]
impl CompanyRepository for InMemoryCompanyRepository {
  async fn create(&self, company: Company) -> Result<Company, CompanyError> {
    let mut companies = lock(&self.companies)?;
    if companies.iter().any(|c| c.name == company.name) {
      return Err(CompanyError::DuplicateName);
    }
    companies.push(company.clone());
    Ok(company)
  }

  async fn find_by_name(&self, name: &str) -> Result<Option<Company>, CompanyError> {
    Ok(
      lock(&self.companies)?
        .iter()
        .find(|c| c.name == name)
        .cloned(),
    )
  }
}

#[derive(Default)]
pub struct InMemoryJobRepository {
  jobs: Mutex<Vec<Job>>,
}

impl InMemoryJobRepository {
  pub fn new() -> Self {
    Self::default()
  }
}

#[async_trait]
impl JobRepository for InMemoryJobRepository {
  async fn create(&self, job: Job) -> Result<Job, JobBoardError> {
    lock(&self.jobs)?.push(job.clone());
    Ok(job)
  }

  async fn find_by_id(&self, id: Uuid) -> Result<Option<Job>, JobBoardError> {
    Ok(lock(&self.jobs)?.iter().find(|j| j.id == id).cloned())
  }

  async fn list_all(&self) -> Result<Vec<Job>, JobBoardError> {
    Ok(lock(&self.jobs)?.clone())
  }
}

#[derive(Default)]
pub struct InMemoryApplicationRepository {
  applications: Mutex<Vec<Application>>,
}

impl InMemoryApplicationRepository {
  pub fn new() -> Self {
    Self::default()
  }
}

#[async_trait]
impl ApplicationRepository for InMemoryApplicationRepository {
  async fn create(&self, application: Application) -> Result<Application, JobBoardError> {
    let mut applications = lock(&self.applications)?;
    if applications
      .iter()
      .any(|a| a.belongs_to(application.job_id, application.applicant_id))
    {
      return Err(
        RepositoryError::DuplicateKey("applications_job_id_applicant_id_key".to_string()).into(),
      );
    }
    applications.push(application.clone());
    Ok(application)
  }

  async fn find_for_job(
    &self,
    job_id: Uuid,
    applicant_id: Uuid,
  ) -> Result<Option<Application>, JobBoardError> {
    Ok(
      lock(&self.applications)?
        .iter()
        .find(|a| a.belongs_to(job_id, applicant_id))
        .cloned(),
    )
  }

  async fn find_by_applicant(&self, applicant_id: Uuid) -> Result<Vec<Application>, JobBoardError> {
    Ok(
      lock(&self.applications)?
        .iter()
        .filter(|a| a.applicant_id == applicant_id)
        .cloned()
        .collect(),
    )
  }

  async fn delete(&self, id: Uuid) -> Result<(), JobBoardError> {
    lock(&self.applications)?.retain(|a| a.id != id);
    Ok(())
  }

  async fn delete_by_applicant(&self, applicant_id: Uuid) -> Result<u64, JobBoardError> {
    let mut applications = lock(&self.applications)?;
    let before = applications.len();
    applications.retain(|a| a.applicant_id != applicant_id);
    Ok((before - applications.len()) as u64)
  }
}
