mod common;

use actix_web::{http::StatusCode, test};
use async_trait::async_trait;
use serde_json::{Value, json};
use std::sync::Arc;
use uuid::Uuid;

use common::{bearer, context, init_app, sign_in};
use jobboard::adapters::http::{ApiDependencies, Repositories};
use jobboard::domain::auth::{RepositoryError, UserRole};
use jobboard::domain::jobs::{Job, JobBoardError, JobRepository};
use jobboard::infrastructure::persistence::memory::{
  InMemoryApplicationRepository, InMemoryCompanyRepository, InMemorySessionRepository,
  InMemoryUserRepository,
};

fn job_body(company: &str) -> Value {
  json!({
    "title": "Designer",
    "description": "Draw things",
    "requirements": "Taste",
    "location": "Berlin",
    "salary": 70000,
    "company": company,
  })
}

#[actix_web::test]
async fn test_list_jobs_envelope() {
  let ctx = context().await;
  let app = init_app!(ctx.deps.clone());

  let req = test::TestRequest::get()
    .uri("/api/v1/alljobs")
    .insert_header(bearer(&ctx.user_token))
    .to_request();
  let resp = test::call_service(&app, req).await;

  assert_eq!(resp.status(), StatusCode::OK);
  let body: Value = test::read_body_json(resp).await;
  assert_eq!(body["success"], true);
  assert_eq!(body["message"], "Here's all the available jobs");
  let data = body["data"].as_array().unwrap();
  assert_eq!(data.len(), ctx.jobs.list_all().await.unwrap().len());
  assert_eq!(data[0]["title"], "Engineer");
  assert_eq!(data[0]["salary"], json!(120000.0));
}

#[actix_web::test]
async fn test_ceo_creates_job() {
  let ctx = context().await;
  let app = init_app!(ctx.deps.clone());

  let req = test::TestRequest::post()
    .uri("/api/v1/jobs")
    .insert_header(bearer(&ctx.ceo_token))
    .set_json(job_body("Acme"))
    .to_request();
  let resp = test::call_service(&app, req).await;

  assert_eq!(resp.status(), StatusCode::OK);
  let body: Value = test::read_body_json(resp).await;
  assert_eq!(body, json!({ "success": true, "message": "Job created successfully" }));
  assert_eq!(ctx.jobs.list_all().await.unwrap().len(), 2);
}

#[actix_web::test]
async fn test_non_ceo_cannot_create_job() {
  let ctx = context().await;
  let app = init_app!(ctx.deps.clone());

  let req = test::TestRequest::post()
    .uri("/api/v1/jobs")
    .insert_header(bearer(&ctx.user_token))
    .set_json(job_body("Acme"))
    .to_request();
  let resp = test::call_service(&app, req).await;

  assert_eq!(resp.status(), StatusCode::FORBIDDEN);
  assert_eq!(ctx.jobs.list_all().await.unwrap().len(), 1);
}

#[actix_web::test]
async fn test_create_job_requires_authentication() {
  let ctx = context().await;
  let app = init_app!(ctx.deps.clone());

  let req = test::TestRequest::post()
    .uri("/api/v1/jobs")
    .set_json(job_body("Acme"))
    .to_request();

  assert_eq!(
    test::call_service(&app, req).await.status(),
    StatusCode::UNAUTHORIZED
  );
}

#[actix_web::test]
async fn test_unknown_company_creates_nothing() {
  let ctx = context().await;
  let app = init_app!(ctx.deps.clone());

  let req = test::TestRequest::post()
    .uri("/api/v1/jobs")
    .insert_header(bearer(&ctx.ceo_token))
    .set_json(job_body("Ghost Inc"))
    .to_request();
  let resp = test::call_service(&app, req).await;

  assert_eq!(resp.status(), StatusCode::NOT_FOUND);
  let body: Value = test::read_body_json(resp).await;
  assert_eq!(body["success"], false);
  assert_eq!(body["message"], "Please enter a valid company");
  assert_eq!(ctx.jobs.list_all().await.unwrap().len(), 1);
}

#[actix_web::test]
async fn test_create_job_validates_body() {
  let ctx = context().await;
  let app = init_app!(ctx.deps.clone());

  let mut negative_salary = job_body("Acme");
  negative_salary["salary"] = json!(-10);
  let mut missing_title = job_body("Acme");
  missing_title.as_object_mut().unwrap().remove("title");

  for body in [negative_salary, missing_title] {
    let req = test::TestRequest::post()
      .uri("/api/v1/jobs")
      .insert_header(bearer(&ctx.ceo_token))
      .set_json(body)
      .to_request();
    assert_eq!(
      test::call_service(&app, req).await.status(),
      StatusCode::BAD_REQUEST
    );
  }
  assert_eq!(ctx.jobs.list_all().await.unwrap().len(), 1);
}

#[actix_web::test]
async fn test_salary_must_fit_storage() {
  let ctx = context().await;
  let app = init_app!(ctx.deps.clone());

  for salary in [json!(10000000000000u64), json!("0.001")] {
    let mut body = job_body("Acme");
    body["salary"] = salary;
    let req = test::TestRequest::post()
      .uri("/api/v1/jobs")
      .insert_header(bearer(&ctx.ceo_token))
      .set_json(body)
      .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "validation_error");
  }
  assert_eq!(ctx.jobs.list_all().await.unwrap().len(), 1);
}

struct UnavailableJobRepository;

#[async_trait]
impl JobRepository for UnavailableJobRepository {
  async fn create(&self, _job: Job) -> Result<Job, JobBoardError> {
    Err(unavailable())
  }

  async fn find_by_id(&self, _id: Uuid) -> Result<Option<Job>, JobBoardError> {
    Err(unavailable())
  }

  async fn list_all(&self) -> Result<Vec<Job>, JobBoardError> {
    Err(unavailable())
  }
}

fn unavailable() -> JobBoardError {
  JobBoardError::Repository(RepositoryError::ConnectionFailed("Pool timed out".to_string()))
}

#[actix_web::test]
async fn test_list_jobs_failure_envelope() {
  let users = Arc::new(InMemoryUserRepository::new());
  let sessions = Arc::new(InMemorySessionRepository::new());
  let (_, token) = sign_in(users.as_ref(), sessions.as_ref(), "bob", UserRole::User).await;
  let deps = ApiDependencies::new(Repositories {
    users,
    sessions,
    companies: Arc::new(InMemoryCompanyRepository::new()),
    jobs: Arc::new(UnavailableJobRepository),
    applications: Arc::new(InMemoryApplicationRepository::new()),
  });
  let app = init_app!(deps);

  let request_id = Uuid::new_v4().to_string();
  let req = test::TestRequest::get()
    .uri("/api/v1/alljobs")
    .insert_header(bearer(&token))
    .insert_header(("X-Request-ID", request_id.as_str()))
    .to_request();
  let resp = test::call_service(&app, req).await;

  assert_eq!(resp.status(), StatusCode::NOT_IMPLEMENTED);
  assert_eq!(
    resp.headers().get("x-request-id").unwrap().to_str().unwrap(),
    request_id
  );
  let body: Value = test::read_body_json(resp).await;
  assert_eq!(
    body,
    json!({ "data": [], "success": false, "message": "Server error" })
  );
}

#[actix_web::test]
async fn test_company_routes_are_not_mounted() {
  let ctx = context().await;
  let app = init_app!(ctx.deps.clone());

  for uri in ["/api/v1/company", "/api/v1/company/jobs"] {
    let req = test::TestRequest::get()
      .uri(uri)
      .insert_header(bearer(&ctx.ceo_token))
      .to_request();
    assert_eq!(
      test::call_service(&app, req).await.status(),
      StatusCode::NOT_FOUND
    );
  }
}
