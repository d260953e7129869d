pub mod entities;
pub mod errors;
pub mod ports;
pub mod services;
pub mod value_objects;

pub use entities::{Application, Job, JobPosting};
pub use errors::JobBoardError;
pub use ports::{ApplicationRepository, JobRepository};
pub use services::JobBoardService;
pub use value_objects::{ApplicationDocuments, ApplicationStatus, Salary, ValueObjectError};
