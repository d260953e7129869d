//! Job application use cases, all scoped to the calling applicant

mod cancel_all_applications;
mod get_application;
mod list_my_applications;
mod submit_application;
mod withdraw_application;

pub use cancel_all_applications::{
  CancelAllApplicationsCommand, CancelAllApplicationsResponse, CancelAllApplicationsUseCase,
};
pub use get_application::{GetApplicationCommand, GetApplicationResponse, GetApplicationUseCase};
pub use list_my_applications::{ListMyApplicationsCommand, ListMyApplicationsUseCase};
pub use submit_application::{
  SubmitApplicationCommand, SubmitApplicationResponse, SubmitApplicationUseCase,
};
pub use withdraw_application::{
  WithdrawApplicationCommand, WithdrawApplicationResponse, WithdrawApplicationUseCase,
};

#[cfg(test)]
pub(crate) mod test_support {
  use rust_decimal_macros::dec;
  use std::sync::Arc;
  use uuid::Uuid;

  use crate::domain::company::{Company, CompanyName, CompanyRepository};
  use crate::domain::jobs::{JobBoardService, JobPosting, Salary};
  use crate::infrastructure::persistence::memory::{
    InMemoryApplicationRepository, InMemoryCompanyRepository, InMemoryJobRepository,
  };

  /// Service over fresh in-memory repositories with one "Engineer" job posted
  pub async fn service_with_job() -> (Arc<JobBoardService>, Uuid) {
    let companies = Arc::new(InMemoryCompanyRepository::new());
    companies
      .create(Company::new(CompanyName::new("Acme").unwrap()))
      .await
      .unwrap();
    let service = Arc::new(JobBoardService::new(
      Arc::new(InMemoryJobRepository::new()),
      Arc::new(InMemoryApplicationRepository::new()),
      companies,
    ));
    let job = service
      .post_job(JobPosting {
        title: "Engineer".to_string(),
        description: "Build things".to_string(),
        requirements: "Rust".to_string(),
        location: "Remote".to_string(),
        salary: Salary::new(dec!(90000)).unwrap(),
        company: "Acme".to_string(),
      })
      .await
      .unwrap();
    (service, job.id)
  }
}
