use std::sync::Arc;

use crate::domain::auth::entities::User;
use crate::domain::auth::errors::AuthError;
use crate::domain::auth::ports::UserRepository;

#[derive(Debug, Clone)]
pub struct GetUserByNameCommand {
  pub name: String,
}

/// Looks a user up by display name; the first match wins
pub struct GetUserByNameUseCase {
  user_repo: Arc<dyn UserRepository>,
}

impl GetUserByNameUseCase {
  pub fn new(user_repo: Arc<dyn UserRepository>) -> Self {
    Self { user_repo }
  }

  /// # Errors
  /// Returns `AuthError::UserNotFound` when nobody has that name
  pub async fn execute(&self, command: GetUserByNameCommand) -> Result<User, AuthError> {
    self
      .user_repo
      .find_by_name(&command.name)
      .await?
      .ok_or(AuthError::UserNotFound)
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::domain::auth::entities::UserRole;
  use crate::infrastructure::persistence::memory::InMemoryUserRepository;

  #[tokio::test]
  async fn test_finds_user_by_name() {
    let repo = Arc::new(InMemoryUserRepository::new());
    let created = repo
      .create(User::new("heidi".to_string(), None, UserRole::User))
      .await
      .unwrap();

    let found = GetUserByNameUseCase::new(repo)
      .execute(GetUserByNameCommand {
        name: "heidi".to_string(),
      })
      .await
      .unwrap();

    assert_eq!(found.id, created.id);
  }

  #[tokio::test]
  async fn test_unknown_name_is_not_found() {
    let use_case = GetUserByNameUseCase::new(Arc::new(InMemoryUserRepository::new()));

    let result = use_case
      .execute(GetUserByNameCommand {
        name: "nobody".to_string(),
      })
      .await;

    assert!(matches!(result, Err(AuthError::UserNotFound)));
  }
}
