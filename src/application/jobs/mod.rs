//! Job posting use cases

mod list_jobs;
mod post_job;

pub use list_jobs::{ListJobsResponse, ListJobsUseCase};
pub use post_job::{PostJobCommand, PostJobResponse, PostJobUseCase};
