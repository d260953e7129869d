use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use uuid::Uuid;

use super::value_objects::ValueObjectError;

/// User entity representing a person known to the job board
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
  /// Unique identifier for the user
  pub id: Uuid,
  /// Display name, also used as a lookup key
  pub name: String,
  /// Contact email address (optional)
  pub email: Option<String>,
  /// Authorization level of the user
  pub role: UserRole,
  /// Timestamp when the user was created
  pub created_at: DateTime<Utc>,
  /// Timestamp when the user was last updated
  pub updated_at: DateTime<Utc>,
}

impl User {
  /// Creates a new user with the given details
  pub fn new(name: String, email: Option<String>, role: UserRole) -> Self {
    let now = Utc::now();
    Self {
      id: Uuid::new_v4(),
      name,
      email,
      role,
      created_at: now,
      updated_at: now,
    }
  }

  /// Creates a user from database fields (for reconstruction)
  pub fn from_db(
    id: Uuid,
    name: String,
    email: Option<String>,
    role: String,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
  ) -> Result<Self, ValueObjectError> {
    Ok(Self {
      id,
      name,
      email,
      role: role.parse()?,
      created_at,
      updated_at,
    })
  }

  /// Whether the user may post jobs
  pub fn is_ceo(&self) -> bool {
    matches!(self.role, UserRole::Ceo)
  }

  /// Whether the user holds at least the given role
  pub fn has_role(&self, role: UserRole) -> bool {
    match role {
      UserRole::User => true,
      UserRole::Ceo => self.is_ceo(),
    }
  }
}

/// User role enum
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
  Ceo,
  User,
}

impl UserRole {
  pub fn as_str(&self) -> &'static str {
    match self {
      UserRole::Ceo => "ceo",
      UserRole::User => "user",
    }
  }
}

impl FromStr for UserRole {
  type Err = ValueObjectError;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    match s.to_lowercase().as_str() {
      "ceo" => Ok(UserRole::Ceo),
      "user" => Ok(UserRole::User),
      other => Err(ValueObjectError::InvalidRole(other.to_string())),
    }
  }
}

/// Session entity issued by the identity service and resolved here
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Session {
  /// Unique identifier for the session
  pub id: Uuid,
  /// Reference to the user who owns this session
  pub user_id: Uuid,
  /// SHA-256 hash of the bearer token
  pub token_hash: String,
  /// Timestamp when the session expires
  pub expires_at: DateTime<Utc>,
  /// Timestamp when the session was created
  pub created_at: DateTime<Utc>,
}

impl Session {
  /// Creates a new session for a user
  pub fn new(user_id: Uuid, token_hash: String, expires_at: DateTime<Utc>) -> Self {
    Self {
      id: Uuid::new_v4(),
      user_id,
      token_hash,
      expires_at,
      created_at: Utc::now(),
    }
  }

  /// Creates a session with a duration instead of absolute expiration time
  pub fn with_duration(user_id: Uuid, token_hash: String, duration: Duration) -> Self {
    Self::new(user_id, token_hash, Utc::now() + duration)
  }

  /// Creates a session from database fields (for reconstruction)
  pub fn from_db(
    id: Uuid,
    user_id: Uuid,
    token_hash: String,
    expires_at: DateTime<Utc>,
    created_at: DateTime<Utc>,
  ) -> Self {
    Self {
      id,
      user_id,
      token_hash,
      expires_at,
      created_at,
    }
  }

  /// Checks if the session has expired
  pub fn is_expired(&self) -> bool {
    self.expires_at <= Utc::now()
  }
}
