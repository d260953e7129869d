use async_trait::async_trait;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use sqlx::{FromRow, PgPool};
use uuid::Uuid;

use crate::domain::jobs::{Job, JobBoardError, JobRepository};

#[derive(Debug, FromRow)]
struct JobRow {
  id: Uuid,
  title: String,
  description: String,
  requirements: String,
  location: String,
  salary: Decimal,
  company_name: String,
  created_at: DateTime<Utc>,
}

impl From<JobRow> for Job {
  fn from(row: JobRow) -> Self {
    Job {
      id: row.id,
      title: row.title,
      description: row.description,
      requirements: row.requirements,
      location: row.location,
      salary: row.salary,
      company: row.company_name,
      created_at: row.created_at,
    }
  }
}

pub struct PostgresJobRepository {
  pool: PgPool,
}

impl PostgresJobRepository {
  pub fn new(pool: PgPool) -> Self {
    Self { pool }
  }
}

#[async_trait]
impl JobRepository for PostgresJobRepository {
  async fn create(&self, job: Job) -> Result<Job, JobBoardError> {
    let row = sqlx::query_as::<_, JobRow>(
      r#"
            INSERT INTO jobs (id, title, description, requirements, location, salary, company_name, created_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            RETURNING id, title, description, requirements, location, salary, company_name, created_at
            "#,
    )
    .bind(job.id)
    .bind(&job.title)
    .bind(&job.description)
    .bind(&job.requirements)
    .bind(&job.location)
    .bind(job.salary)
    .bind(&job.company)
    .bind(job.created_at)
    .fetch_one(&self.pool)
    .await?;

    Ok(row.into())
  }

  async fn find_by_id(&self, id: Uuid) -> Result<Option<Job>, JobBoardError> {
    let row = sqlx::query_as::<_, JobRow>(
      r#"
            SELECT id, title, description, requirements, location, salary, company_name, created_at
            FROM jobs
            WHERE id = $1
            "#,
    )
    .bind(id)
    .fetch_optional(&self.pool)
    .await?;

    Ok(row.map(Job::from))
  }

  async fn list_all(&self) -> Result<Vec<Job>, JobBoardError> {
    let rows = sqlx::query_as::<_, JobRow>(
      r#"
            SELECT id, title, description, requirements, location, salary, company_name, created_at
            FROM jobs
            ORDER BY created_at DESC
            "#,
    )
    .fetch_all(&self.pool)
    .await?;

    Ok(rows.into_iter().map(Job::from).collect())
  }
}
