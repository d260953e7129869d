use actix_web::web;
use std::sync::Arc;

use crate::application::applications::{
  CancelAllApplicationsUseCase, GetApplicationUseCase, ListMyApplicationsUseCase,
  SubmitApplicationUseCase, WithdrawApplicationUseCase,
};
use crate::application::auth::GetCurrentUserUseCase;
use crate::application::jobs::{ListJobsUseCase, PostJobUseCase};
use crate::application::users::{GetUserByNameUseCase, ListUsersUseCase};
use crate::domain::auth::entities::UserRole;
use crate::domain::auth::ports::{SessionRepository, UserRepository};
use crate::domain::auth::services::AuthService;
use crate::domain::company::CompanyRepository;
use crate::domain::jobs::{ApplicationRepository, JobBoardService, JobRepository};

use super::handlers::applications::{
  cancel_all_applications_handler, get_application_handler, list_my_applications_handler,
  submit_application_handler, withdraw_application_handler,
};
use super::handlers::jobs::{create_job_handler, list_jobs_handler};
use super::handlers::users::{get_user_by_name_handler, list_users_handler};
use super::middleware::RequireRole;

/// Storage backends the API is wired against
pub struct Repositories {
  pub users: Arc<dyn UserRepository>,
  pub sessions: Arc<dyn SessionRepository>,
  pub companies: Arc<dyn CompanyRepository>,
  pub jobs: Arc<dyn JobRepository>,
  pub applications: Arc<dyn ApplicationRepository>,
}

/// Every use case behind the API, built once and cloned into each worker
#[derive(Clone)]
pub struct ApiDependencies {
  pub get_current_user: Arc<GetCurrentUserUseCase>,
  pub list_users: Arc<ListUsersUseCase>,
  pub get_user_by_name: Arc<GetUserByNameUseCase>,
  pub list_my_applications: Arc<ListMyApplicationsUseCase>,
  pub cancel_all_applications: Arc<CancelAllApplicationsUseCase>,
  pub get_application: Arc<GetApplicationUseCase>,
  pub submit_application: Arc<SubmitApplicationUseCase>,
  pub withdraw_application: Arc<WithdrawApplicationUseCase>,
  pub list_jobs: Arc<ListJobsUseCase>,
  pub post_job: Arc<PostJobUseCase>,
}

impl ApiDependencies {
  pub fn new(repos: Repositories) -> Self {
    let auth_service = Arc::new(AuthService::new(repos.users.clone(), repos.sessions));
    let job_board_service = Arc::new(JobBoardService::new(
      repos.jobs,
      repos.applications,
      repos.companies,
    ));

    Self {
      get_current_user: Arc::new(GetCurrentUserUseCase::new(auth_service)),
      list_users: Arc::new(ListUsersUseCase::new(repos.users.clone())),
      get_user_by_name: Arc::new(GetUserByNameUseCase::new(repos.users)),
      list_my_applications: Arc::new(ListMyApplicationsUseCase::new(job_board_service.clone())),
      cancel_all_applications: Arc::new(CancelAllApplicationsUseCase::new(
        job_board_service.clone(),
      )),
      get_application: Arc::new(GetApplicationUseCase::new(job_board_service.clone())),
      submit_application: Arc::new(SubmitApplicationUseCase::new(job_board_service.clone())),
      withdraw_application: Arc::new(WithdrawApplicationUseCase::new(job_board_service.clone())),
      list_jobs: Arc::new(ListJobsUseCase::new(job_board_service.clone())),
      post_job: Arc::new(PostJobUseCase::new(job_board_service)),
    }
  }
}

/// Configure every protected API route
///
/// The caller mounts this inside a scope wrapped with `AuthMiddleware`.
///
/// ```no_run
/// use actix_web::{App, web};
/// # use jobboard::adapters::http::{ApiDependencies, AuthMiddleware, configure_api_routes};
///
/// # fn example(deps: ApiDependencies) {
/// let app = App::new().service(
///   web::scope("/api/v1")
///     .wrap(AuthMiddleware::new(deps.get_current_user.clone()))
///     .configure(|cfg| configure_api_routes(cfg, &deps)),
/// );
/// # }
/// ```
pub fn configure_api_routes(cfg: &mut web::ServiceConfig, deps: &ApiDependencies) {
  configure_user_routes(cfg, deps.list_users.clone(), deps.get_user_by_name.clone());
  configure_application_routes(
    cfg,
    ApplicationRouteDependencies {
      list_mine: deps.list_my_applications.clone(),
      cancel_all: deps.cancel_all_applications.clone(),
      get: deps.get_application.clone(),
      submit: deps.submit_application.clone(),
      withdraw: deps.withdraw_application.clone(),
    },
  );
  configure_job_routes(cfg, deps.list_jobs.clone(), deps.post_job.clone());
}

/// Configure user lookup routes
///
/// - GET /users - List every user
/// - GET /user - Find a user by name (JSON body)
pub fn configure_user_routes(
  cfg: &mut web::ServiceConfig,
  list_users_use_case: Arc<ListUsersUseCase>,
  get_user_use_case: Arc<GetUserByNameUseCase>,
) {
  cfg
    .app_data(web::Data::new(list_users_use_case))
    .app_data(web::Data::new(get_user_use_case))
    .route("/users", web::get().to(list_users_handler))
    .route("/user", web::get().to(get_user_by_name_handler));
}

/// Dependencies for the application routes
pub struct ApplicationRouteDependencies {
  pub list_mine: Arc<ListMyApplicationsUseCase>,
  pub cancel_all: Arc<CancelAllApplicationsUseCase>,
  pub get: Arc<GetApplicationUseCase>,
  pub submit: Arc<SubmitApplicationUseCase>,
  pub withdraw: Arc<WithdrawApplicationUseCase>,
}

/// Configure job application routes, all scoped to the authenticated caller
///
/// - GET /applications - List the caller's applications
/// - DELETE /applications - Cancel all of them
/// - GET /application/{jobId} - The caller's application for a job
/// - POST /application/{jobId} - Apply to a job
/// - DELETE /application/{jobId} - Withdraw the application
pub fn configure_application_routes(
  cfg: &mut web::ServiceConfig,
  deps: ApplicationRouteDependencies,
) {
  cfg
    .app_data(web::Data::new(deps.list_mine))
    .app_data(web::Data::new(deps.cancel_all))
    .app_data(web::Data::new(deps.get))
    .app_data(web::Data::new(deps.submit))
    .app_data(web::Data::new(deps.withdraw))
    .service(
      web::resource("/applications")
        .route(web::get().to(list_my_applications_handler))
        .route(web::delete().to(cancel_all_applications_handler)),
    )
    .service(
      web::resource("/application/{job_id}")
        .route(web::get().to(get_application_handler))
        .route(web::post().to(submit_application_handler))
        .route(web::delete().to(withdraw_application_handler)),
    );
}

/// Configure job routes
///
/// - GET /alljobs - List all jobs
/// - POST /jobs - Create a job (CEO only)
pub fn configure_job_routes(
  cfg: &mut web::ServiceConfig,
  list_jobs_use_case: Arc<ListJobsUseCase>,
  post_job_use_case: Arc<PostJobUseCase>,
) {
  cfg
    .app_data(web::Data::new(list_jobs_use_case))
    .app_data(web::Data::new(post_job_use_case))
    .route("/alljobs", web::get().to(list_jobs_handler))
    .service(
      web::resource("/jobs")
        .wrap(RequireRole::new(UserRole::Ceo))
        .route(web::post().to(create_job_handler)),
    );
}
