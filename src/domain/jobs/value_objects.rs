use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValueObjectError {
  #[error("Salary cannot be negative")]
  NegativeSalary,

  #[error("Salary must be less than {0}")]
  SalaryTooLarge(Decimal),

  #[error("Salary cannot have more than {0} decimal places")]
  SalaryTooPrecise(u32),

  #[error("{field} must be between {min} and {max} characters")]
  InvalidLength {
    field: &'static str,
    min: usize,
    max: usize,
  },

  #[error("Unknown application status: {0}")]
  UnknownStatus(String),
}

/// Lifecycle state of an application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ApplicationStatus {
  Pending,
  Reviewed,
  Accepted,
  Rejected,
}

impl ApplicationStatus {
  pub fn as_str(&self) -> &'static str {
    match self {
      ApplicationStatus::Pending => "pending",
      ApplicationStatus::Reviewed => "reviewed",
      ApplicationStatus::Accepted => "accepted",
      ApplicationStatus::Rejected => "rejected",
    }
  }
}

impl FromStr for ApplicationStatus {
  type Err = ValueObjectError;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    match s.to_lowercase().as_str() {
      "pending" => Ok(ApplicationStatus::Pending),
      "reviewed" => Ok(ApplicationStatus::Reviewed),
      "accepted" => Ok(ApplicationStatus::Accepted),
      "rejected" => Ok(ApplicationStatus::Rejected),
      _ => Err(ValueObjectError::UnknownStatus(s.to_string())),
    }
  }
}

impl fmt::Display for ApplicationStatus {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.as_str())
  }
}

/// Salary offered for a job
///
/// Bounded by the `NUMERIC(14, 2)` column it is stored in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Salary(Decimal);

impl Salary {
  pub const MAX_SCALE: u32 = 2;
  /// Exclusive upper bound, 10^12
  pub const LIMIT: Decimal = Decimal::from_parts(3_567_587_328, 232, 0, false, 0);

  pub fn new(amount: Decimal) -> Result<Self, ValueObjectError> {
    if amount.is_sign_negative() && !amount.is_zero() {
      return Err(ValueObjectError::NegativeSalary);
    }
    if amount >= Self::LIMIT {
      return Err(ValueObjectError::SalaryTooLarge(Self::LIMIT));
    }
    if amount.normalize().scale() > Self::MAX_SCALE {
      return Err(ValueObjectError::SalaryTooPrecise(Self::MAX_SCALE));
    }
    Ok(Self(amount))
  }

  pub fn amount(&self) -> Decimal {
    self.0
  }
}

/// Resume and cover letter submitted with an application
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApplicationDocuments {
  resume: String,
  cover_letter: String,
}

impl ApplicationDocuments {
  pub const MAX_RESUME_LENGTH: usize = 20_000;
  pub const MAX_COVER_LETTER_LENGTH: usize = 10_000;

  pub fn new(resume: String, cover_letter: String) -> Result<Self, ValueObjectError> {
    check_length("resume", &resume, Self::MAX_RESUME_LENGTH)?;
    check_length("coverLetter", &cover_letter, Self::MAX_COVER_LETTER_LENGTH)?;
    Ok(Self {
      resume,
      cover_letter,
    })
  }

  pub fn into_parts(self) -> (String, String) {
    (self.resume, self.cover_letter)
  }
}

fn check_length(field: &'static str, value: &str, max: usize) -> Result<(), ValueObjectError> {
  let len = value.trim().chars().count();
  if len == 0 || value.chars().count() > max {
    return Err(ValueObjectError::InvalidLength { field, min: 1, max });
  }
  Ok(())
}
