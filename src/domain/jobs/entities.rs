use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::value_objects::{ApplicationDocuments, ApplicationStatus, Salary, ValueObjectError};

/// Job posting creation data
#[derive(Debug, Clone)]
pub struct JobPosting {
  pub title: String,
  pub description: String,
  pub requirements: String,
  pub location: String,
  pub salary: Salary,
  pub company: String,
}

/// A job offered by a company
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Job {
  pub id: Uuid,
  pub title: String,
  pub description: String,
  pub requirements: String,
  pub location: String,
  pub salary: Decimal,
  /// Name of the company offering the job
  pub company: String,
  pub created_at: DateTime<Utc>,
}

impl Job {
  pub fn new(posting: JobPosting) -> Self {
    Self {
      id: Uuid::new_v4(),
      title: posting.title,
      description: posting.description,
      requirements: posting.requirements,
      location: posting.location,
      salary: posting.salary.amount(),
      company: posting.company,
      created_at: Utc::now(),
    }
  }
}

/// A user's application to a job
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Application {
  pub id: Uuid,
  pub applicant_id: Uuid,
  pub job_id: Uuid,
  pub resume: String,
  pub cover_letter: String,
  pub status: ApplicationStatus,
  pub created_at: DateTime<Utc>,
}

impl Application {
  /// New applications always start out pending
  pub fn new(job_id: Uuid, applicant_id: Uuid, documents: ApplicationDocuments) -> Self {
    let (resume, cover_letter) = documents.into_parts();
    Self {
      id: Uuid::new_v4(),
      applicant_id,
      job_id,
      resume,
      cover_letter,
      status: ApplicationStatus::Pending,
      created_at: Utc::now(),
    }
  }

  /// Reconstruct from database
  pub fn from_db(
    id: Uuid,
    applicant_id: Uuid,
    job_id: Uuid,
    resume: String,
    cover_letter: String,
    status: String,
    created_at: DateTime<Utc>,
  ) -> Result<Self, ValueObjectError> {
    Ok(Self {
      id,
      applicant_id,
      job_id,
      resume,
      cover_letter,
      status: status.parse()?,
      created_at,
    })
  }

  pub fn belongs_to(&self, job_id: Uuid, applicant_id: Uuid) -> bool {
    self.job_id == job_id && self.applicant_id == applicant_id
  }
}
