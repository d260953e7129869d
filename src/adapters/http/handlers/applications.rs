use actix_web::{HttpRequest, HttpResponse, web};
use std::sync::Arc;

use super::{get_user, parse_job_id};
use crate::adapters::http::{
  dtos::{
    ApplicationDto, ApplicationResponse, CancelAllResponse, MessageResponse,
    SubmitApplicationRequest, SubmitApplicationResponse, SubmittedApplication,
  },
  errors::ApiError,
  extractors::ValidatedJson,
};
use crate::application::applications::{
  CancelAllApplicationsCommand, CancelAllApplicationsUseCase, GetApplicationCommand,
  GetApplicationUseCase, ListMyApplicationsCommand, ListMyApplicationsUseCase,
  SubmitApplicationCommand, SubmitApplicationUseCase, WithdrawApplicationCommand,
  WithdrawApplicationUseCase,
};

/// GET /applications
///
/// Response: the caller's applications
pub async fn list_my_applications_handler(
  req: HttpRequest,
  use_case: web::Data<Arc<ListMyApplicationsUseCase>>,
) -> Result<HttpResponse, ApiError> {
  let user = get_user(&req)?;

  let applications = use_case
    .execute(ListMyApplicationsCommand {
      applicant_id: user.id,
    })
    .await?;

  let body: Vec<ApplicationDto> = applications.into_iter().map(ApplicationDto::from).collect();

  Ok(HttpResponse::Ok().json(body))
}

/// DELETE /applications
///
/// Cancels every application of the caller; succeeds with zero as well
pub async fn cancel_all_applications_handler(
  req: HttpRequest,
  use_case: web::Data<Arc<CancelAllApplicationsUseCase>>,
) -> Result<HttpResponse, ApiError> {
  let user = get_user(&req)?;

  let response = use_case
    .execute(CancelAllApplicationsCommand {
      applicant_id: user.id,
    })
    .await?;

  Ok(HttpResponse::Ok().json(CancelAllResponse {
    message: "Your applications have been canceled".to_string(),
    deleted: response.deleted,
  }))
}

/// GET /application/{jobId}
pub async fn get_application_handler(
  req: HttpRequest,
  path: web::Path<String>,
  use_case: web::Data<Arc<GetApplicationUseCase>>,
) -> Result<HttpResponse, ApiError> {
  let user = get_user(&req)?;
  let job_id = parse_job_id(&path)?;

  let response = use_case
    .execute(GetApplicationCommand {
      job_id,
      applicant_id: user.id,
    })
    .await?;

  Ok(HttpResponse::Ok().json(ApplicationResponse {
    message: format!("Here's your application in {}", response.job_title),
    application: response.application.into(),
  }))
}

/// POST /application/{jobId}
///
/// Body: `{ "resume": string, "coverLetter": string }`
pub async fn submit_application_handler(
  req: HttpRequest,
  path: web::Path<String>,
  request: ValidatedJson<SubmitApplicationRequest>,
  use_case: web::Data<Arc<SubmitApplicationUseCase>>,
) -> Result<HttpResponse, ApiError> {
  let user = get_user(&req)?;
  let job_id = parse_job_id(&path)?;
  let request = request.into_inner();

  let command = SubmitApplicationCommand {
    job_id,
    applicant_id: user.id,
    resume: request.resume,
    cover_letter: request.cover_letter,
  };

  let response = use_case.execute(command).await?;

  Ok(HttpResponse::Ok().json(SubmitApplicationResponse {
    message: format!("You successfully applied to {} position", response.job_title),
    data_to_be_sent: SubmittedApplication {
      application: response.application.into(),
      job_title: response.job_title,
    },
  }))
}

/// DELETE /application/{jobId}
pub async fn withdraw_application_handler(
  req: HttpRequest,
  path: web::Path<String>,
  use_case: web::Data<Arc<WithdrawApplicationUseCase>>,
) -> Result<HttpResponse, ApiError> {
  let user = get_user(&req)?;
  let job_id = parse_job_id(&path)?;

  let response = use_case
    .execute(WithdrawApplicationCommand {
      job_id,
      applicant_id: user.id,
    })
    .await?;

  Ok(HttpResponse::Ok().json(MessageResponse {
    message: format!("Your application in {} has been deleted", response.job_title),
  }))
}
