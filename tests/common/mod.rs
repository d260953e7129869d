#![allow(dead_code)]

use chrono::Duration;
use rust_decimal_macros::dec;
use std::sync::Arc;
use uuid::Uuid;

use jobboard::adapters::http::{ApiDependencies, Repositories};
use jobboard::domain::auth::ports::{SessionRepository, UserRepository};
use jobboard::domain::auth::{Session, SessionToken, User, UserRole};
use jobboard::domain::company::{Company, CompanyName, CompanyRepository};
use jobboard::domain::jobs::{Job, JobPosting, JobRepository, Salary};
use jobboard::infrastructure::persistence::memory::{
  InMemoryApplicationRepository, InMemoryCompanyRepository, InMemoryJobRepository,
  InMemorySessionRepository, InMemoryUserRepository,
};

/// Builds the API the way `main` does, over whatever repositories the test hands in
macro_rules! init_app {
  ($deps:expr) => {{
    let deps: jobboard::adapters::http::ApiDependencies = $deps;
    actix_web::test::init_service(
      actix_web::App::new()
        .wrap(jobboard::adapters::http::RequestIdMiddleware::new())
        .service(
          actix_web::web::scope("/api/v1")
            .wrap(jobboard::adapters::http::AuthMiddleware::new(
              deps.get_current_user.clone(),
            ))
            .configure(|cfg| jobboard::adapters::http::configure_api_routes(cfg, &deps)),
        ),
    )
    .await
  }};
}

pub(crate) use init_app;

pub struct TestContext {
  pub deps: ApiDependencies,
  pub jobs: Arc<InMemoryJobRepository>,
  pub applications: Arc<InMemoryApplicationRepository>,
  pub ceo_token: String,
  pub user_token: String,
  pub user_id: Uuid,
  /// Id of the seeded "Engineer" job at Acme
  pub job_id: Uuid,
}

pub fn bearer(token: &str) -> (&'static str, String) {
  ("Authorization", format!("Bearer {}", token))
}

/// Creates a user and a one-hour session for them, returning the raw token
pub async fn sign_in(
  users: &dyn UserRepository,
  sessions: &dyn SessionRepository,
  name: &str,
  role: UserRole,
) -> (Uuid, String) {
  let user = users
    .create(User::new(name.to_string(), None, role))
    .await
    .unwrap();
  let token = SessionToken::generate().unwrap();
  sessions
    .create(Session::with_duration(
      user.id,
      token.hash().into_inner(),
      Duration::hours(1),
    ))
    .await
    .unwrap();
  (user.id, token.as_str().to_string())
}

pub fn engineer_posting() -> JobPosting {
  JobPosting {
    title: "Engineer".to_string(),
    description: "Build things".to_string(),
    requirements: "Rust".to_string(),
    location: "Remote".to_string(),
    salary: Salary::new(dec!(120000)).unwrap(),
    company: "Acme".to_string(),
  }
}

/// Alice is CEO, Bob is a regular user; Acme exists and has one job
pub async fn context() -> TestContext {
  let users = Arc::new(InMemoryUserRepository::new());
  let sessions = Arc::new(InMemorySessionRepository::new());
  let companies = Arc::new(InMemoryCompanyRepository::new());
  let jobs = Arc::new(InMemoryJobRepository::new());
  let applications = Arc::new(InMemoryApplicationRepository::new());

  let (_, ceo_token) = sign_in(users.as_ref(), sessions.as_ref(), "alice", UserRole::Ceo).await;
  let (user_id, user_token) =
    sign_in(users.as_ref(), sessions.as_ref(), "bob", UserRole::User).await;

  companies
    .create(Company::new(CompanyName::new("Acme").unwrap()))
    .await
    .unwrap();
  let job = jobs.create(Job::new(engineer_posting())).await.unwrap();

  let deps = ApiDependencies::new(Repositories {
    users,
    sessions,
    companies,
    jobs: jobs.clone(),
    applications: applications.clone(),
  });

  TestContext {
    deps,
    jobs,
    applications,
    ceo_token,
    user_token,
    user_id,
    job_id: job.id,
  }
}
