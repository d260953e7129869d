use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool};
use uuid::Uuid;

use crate::domain::jobs::{Application, ApplicationRepository, JobBoardError};

#[derive(Debug, FromRow)]
struct ApplicationRow {
  id: Uuid,
  applicant_id: Uuid,
  job_id: Uuid,
  resume: String,
  cover_letter: String,
  status: String,
  created_at: DateTime<Utc>,
}

impl TryFrom<ApplicationRow> for Application {
  type Error = JobBoardError;

  fn try_from(row: ApplicationRow) -> Result<Self, Self::Error> {
    Ok(Application::from_db(
      row.id,
      row.applicant_id,
      row.job_id,
      row.resume,
      row.cover_letter,
      row.status,
      row.created_at,
    )?)
  }
}

pub struct PostgresApplicationRepository {
  pool: PgPool,
}

impl PostgresApplicationRepository {
  pub fn new(pool: PgPool) -> Self {
    Self { pool }
  }
}

#[async_trait]
impl ApplicationRepository for PostgresApplicationRepository {
  async fn create(&self, application: Application) -> Result<Application, JobBoardError> {
    let row = sqlx::query_as::<_, ApplicationRow>(
      r#"
            INSERT INTO applications (id, applicant_id, job_id, resume, cover_letter, status, created_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING id, applicant_id, job_id, resume, cover_letter, status, created_at
            "#,
    )
    .bind(application.id)
    .bind(application.applicant_id)
    .bind(application.job_id)
    .bind(&application.resume)
    .bind(&application.cover_letter)
    .bind(application.status.as_str())
    .bind(application.created_at)
    .fetch_one(&self.pool)
    .await?;

    row.try_into()
  }

  async fn find_for_job(
    &self,
    job_id: Uuid,
    applicant_id: Uuid,
  ) -> Result<Option<Application>, JobBoardError> {
    let row = sqlx::query_as::<_, ApplicationRow>(
      r#"
            SELECT id, applicant_id, job_id, resume, cover_letter, status, created_at
            FROM applications
            WHERE job_id = $1 AND applicant_id = $2
            "#,
    )
    .bind(job_id)
    .bind(applicant_id)
    .fetch_optional(&self.pool)
    .await?;

    row.map(Application::try_from).transpose()
  }

  async fn find_by_applicant(&self, applicant_id: Uuid) -> Result<Vec<Application>, JobBoardError> {
    let rows = sqlx::query_as::<_, ApplicationRow>(
      r#"
            SELECT id, applicant_id, job_id, resume, cover_letter, status, created_at
            FROM applications
            WHERE applicant_id = $1
            ORDER BY created_at DESC
            "#,
    )
    .bind(applicant_id)
    .fetch_all(&self.pool)
    .await?;

    rows.into_iter().map(Application::try_from).collect()
  }

  async fn delete(&self, id: Uuid) -> Result<(), JobBoardError> {
    sqlx::query("DELETE FROM applications WHERE id = $1")
      .bind(id)
      .execute(&self.pool)
      .await?;

    Ok(())
  }

  async fn delete_by_applicant(&self, applicant_id: Uuid) -> Result<u64, JobBoardError> {
    let result = sqlx::query("DELETE FROM applications WHERE applicant_id = $1")
      .bind(applicant_id)
      .execute(&self.pool)
      .await?;

    Ok(result.rows_affected())
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::domain::auth::entities::{User, UserRole};
  use crate::domain::auth::errors::RepositoryError;
  use crate::domain::auth::ports::UserRepository;
  use crate::domain::company::{Company, CompanyName, CompanyRepository};
  use crate::domain::jobs::{ApplicationDocuments, Job, JobPosting, JobRepository, Salary};
  use crate::infrastructure::persistence::postgres::test_support::setup_test_db;
  use crate::infrastructure::persistence::postgres::{
    PostgresCompanyRepository, PostgresJobRepository, PostgresUserRepository,
  };
  use rust_decimal_macros::dec;

  async fn seed(pool: &PgPool) -> (Uuid, Uuid) {
    let user = PostgresUserRepository::new(pool.clone())
      .create(User::new("frank".to_string(), None, UserRole::User))
      .await
      .unwrap();
    PostgresCompanyRepository::new(pool.clone())
      .create(Company::new(CompanyName::new("Acme").unwrap()))
      .await
      .unwrap();
    let job = PostgresJobRepository::new(pool.clone())
      .create(Job::new(JobPosting {
        title: "Engineer".to_string(),
        description: "Build things".to_string(),
        requirements: "Rust".to_string(),
        location: "Remote".to_string(),
        salary: Salary::new(dec!(1)).unwrap(),
        company: "Acme".to_string(),
      }))
      .await
      .unwrap();
    (job.id, user.id)
  }

  fn documents() -> ApplicationDocuments {
    ApplicationDocuments::new("resume".into(), "cover".into()).unwrap()
  }

  #[tokio::test]
  #[ignore = "requires docker"]
  async fn test_application_lifecycle() {
    let (pool, _container) = setup_test_db().await;
    let (job_id, applicant_id) = seed(&pool).await;
    let repo = PostgresApplicationRepository::new(pool);

    let created = repo
      .create(Application::new(job_id, applicant_id, documents()))
      .await
      .unwrap();
    let found = repo.find_for_job(job_id, applicant_id).await.unwrap().unwrap();
    assert_eq!(found.id, created.id);

    repo.delete(created.id).await.unwrap();
    assert!(repo.find_for_job(job_id, applicant_id).await.unwrap().is_none());
  }

  #[tokio::test]
  #[ignore = "requires docker"]
  async fn test_unique_job_applicant_pair() {
    let (pool, _container) = setup_test_db().await;
    let (job_id, applicant_id) = seed(&pool).await;
    let repo = PostgresApplicationRepository::new(pool);

    repo
      .create(Application::new(job_id, applicant_id, documents()))
      .await
      .unwrap();
    let result = repo
      .create(Application::new(job_id, applicant_id, documents()))
      .await;

    assert!(matches!(
      result,
      Err(JobBoardError::Repository(RepositoryError::DuplicateKey(_)))
    ));
  }

  #[tokio::test]
  #[ignore = "requires docker"]
  async fn test_delete_by_applicant_counts_rows() {
    let (pool, _container) = setup_test_db().await;
    let (job_id, applicant_id) = seed(&pool).await;
    let repo = PostgresApplicationRepository::new(pool);

    repo
      .create(Application::new(job_id, applicant_id, documents()))
      .await
      .unwrap();

    assert_eq!(repo.delete_by_applicant(applicant_id).await.unwrap(), 1);
    assert_eq!(repo.delete_by_applicant(applicant_id).await.unwrap(), 0);
    assert!(repo.find_by_applicant(applicant_id).await.unwrap().is_empty());
  }
}
