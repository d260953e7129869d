use std::sync::Arc;

use crate::domain::auth::entities::User;
use crate::domain::auth::errors::AuthError;
use crate::domain::auth::ports::UserRepository;

pub struct ListUsersResponse {
  pub users: Vec<User>,
}

pub struct ListUsersUseCase {
  user_repo: Arc<dyn UserRepository>,
}

impl ListUsersUseCase {
  pub fn new(user_repo: Arc<dyn UserRepository>) -> Self {
    Self { user_repo }
  }

  pub async fn execute(&self) -> Result<ListUsersResponse, AuthError> {
    let users = self.user_repo.list_all().await.map_err(|e| {
      tracing::error!("Failed to list users: {}", e);
      e
    })?;

    Ok(ListUsersResponse { users })
  }
}
