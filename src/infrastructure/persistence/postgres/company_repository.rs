use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool};
use uuid::Uuid;

use crate::domain::company::{Company, CompanyError, CompanyRepository};

#[derive(Debug, FromRow)]
struct CompanyRow {
  id: Uuid,
  name: String,
  created_at: DateTime<Utc>,
  updated_at: DateTime<Utc>,
}

impl From<CompanyRow> for Company {
  fn from(row: CompanyRow) -> Self {
    Company::from_db(row.id, row.name, row.created_at, row.updated_at)
  }
}

pub struct PostgresCompanyRepository {
  pool: PgPool,
}

impl PostgresCompanyRepository {
  pub fn new(pool: PgPool) -> Self {
    Self { pool }
  }
}

#[async_trait]
impl CompanyRepository for PostgresCompanyRepository {
  async fn create(&self, company: Company) -> Result<Company, CompanyError> {
    let row = sqlx::query_as::<_, CompanyRow>(
      r#"
            INSERT INTO companies (id, name, created_at, updated_at)
            VALUES ($1, $2, $3, $4)
            RETURNING id, name, created_at, updated_at
            "#,
    )
    .bind(company.id)
    .bind(&company.name)
    .bind(company.created_at)
    .bind(company.updated_at)
    .fetch_one(&self.pool)
    .await?;

    Ok(row.into())
  }

  async fn find_by_name(&self, name: &str) -> Result<Option<Company>, CompanyError> {
    let row = sqlx::query_as::<_, CompanyRow>(
      r#"
            SELECT id, name, created_at, updated_at
            FROM companies
            WHERE name = $1
            "#,
    )
    .bind(name)
    .fetch_optional(&self.pool)
    .await?;

    Ok(row.map(Company::from))
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::domain::company::CompanyName;
  use crate::infrastructure::persistence::postgres::test_support::setup_test_db;

  #[tokio::test]
  #[ignore = "requires docker"]
  async fn test_company_names_are_unique() {
    let (pool, _container) = setup_test_db().await;
    let repo = PostgresCompanyRepository::new(pool);

    repo
      .create(Company::new(CompanyName::new("Acme").unwrap()))
      .await
      .unwrap();
    let duplicate = repo
      .create(Company::new(CompanyName::new("Acme").unwrap()))
      .await;

    assert!(matches!(duplicate, Err(CompanyError::DuplicateName)));
    assert!(repo.find_by_name("Acme").await.unwrap().is_some());
    assert!(repo.find_by_name("Globex").await.unwrap().is_none());
  }
}
