use actix_web::{HttpRequest, HttpResponse, web};
use std::sync::Arc;

use crate::adapters::http::{
  dtos::{CreateJobRequest, JobDto, JobListResponse, StatusResponse},
  errors::ApiError,
  extractors::ValidatedJson,
  middleware::RequestIdExt,
};
use crate::application::jobs::{ListJobsUseCase, PostJobCommand, PostJobUseCase};

/// GET /alljobs
///
/// Always answers with the `{ data, success, message }` envelope. Failures
/// keep the historical 501 status.
pub async fn list_jobs_handler(
  req: HttpRequest,
  use_case: web::Data<Arc<ListJobsUseCase>>,
) -> HttpResponse {
  match use_case.execute().await {
    Ok(response) => HttpResponse::Ok().json(JobListResponse {
      data: response.jobs.into_iter().map(JobDto::from).collect(),
      success: true,
      message: "Here's all the available jobs".to_string(),
    }),
    Err(e) => {
      let request_id = req.request_id().map(|id| id.value());
      tracing::error!(?request_id, "Failed to list jobs: {}", e);
      HttpResponse::NotImplemented().json(JobListResponse {
        data: Vec::new(),
        success: false,
        message: "Server error".to_string(),
      })
    }
  }
}

/// POST /jobs (CEO only, enforced by `RequireRole`)
///
/// Body: `CreateJobRequest`
pub async fn create_job_handler(
  request: ValidatedJson<CreateJobRequest>,
  use_case: web::Data<Arc<PostJobUseCase>>,
) -> Result<HttpResponse, ApiError> {
  let request = request.into_inner();

  let command = PostJobCommand {
    title: request.title,
    description: request.description,
    requirements: request.requirements,
    location: request.location,
    salary: request.salary,
    company: request.company,
  };

  use_case.execute(command).await?;

  Ok(HttpResponse::Ok().json(StatusResponse {
    success: true,
    message: "Job created successfully".to_string(),
  }))
}
