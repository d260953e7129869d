use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::value_objects::CompanyName;

/// Company entity; jobs reference it by name
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Company {
  pub id: Uuid,
  pub name: String,
  pub created_at: DateTime<Utc>,
  pub updated_at: DateTime<Utc>,
}

impl Company {
  /// Create new company (for creation)
  pub fn new(name: CompanyName) -> Self {
    let now = Utc::now();
    Self {
      id: Uuid::new_v4(),
      name: name.into_inner(),
      created_at: now,
      updated_at: now,
    }
  }

  /// Reconstruct from database
  pub fn from_db(
    id: Uuid,
    name: String,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
  ) -> Self {
    Self {
      id,
      name,
      created_at,
      updated_at,
    }
  }
}
