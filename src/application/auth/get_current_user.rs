use std::sync::Arc;

use crate::domain::auth::entities::User;
use crate::domain::auth::errors::AuthError;
use crate::domain::auth::services::AuthService;
use crate::domain::auth::value_objects::SessionToken;

/// Use case for resolving a bearer token to the user it was issued for
pub struct GetCurrentUserUseCase {
  auth_service: Arc<AuthService>,
}

impl GetCurrentUserUseCase {
  pub fn new(auth_service: Arc<AuthService>) -> Self {
    Self { auth_service }
  }

  /// Executes the get current user use case
  ///
  /// # Errors
  /// Returns `AuthError` if the token is malformed, unknown or expired
  pub async fn execute(&self, session_token: String) -> Result<User, AuthError> {
    let token = SessionToken::from_string(session_token)?;

    self.auth_service.validate_session(token).await
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::domain::auth::entities::{Session, UserRole};
  use crate::domain::auth::ports::{SessionRepository, UserRepository};
  use crate::infrastructure::persistence::memory::{
    InMemorySessionRepository, InMemoryUserRepository,
  };
  use chrono::Duration;

  #[tokio::test]
  async fn test_resolves_token_to_user() {
    let users = Arc::new(InMemoryUserRepository::new());
    let sessions = Arc::new(InMemorySessionRepository::new());
    let use_case = GetCurrentUserUseCase::new(Arc::new(AuthService::new(
      users.clone(),
      sessions.clone(),
    )));

    let user = users
      .create(User::new("grace".to_string(), None, UserRole::Ceo))
      .await
      .unwrap();
    let token = SessionToken::generate().unwrap();
    sessions
      .create(Session::with_duration(
        user.id,
        token.hash().into_inner(),
        Duration::hours(1),
      ))
      .await
      .unwrap();

    let resolved = use_case.execute(token.as_str().to_string()).await.unwrap();
    assert_eq!(resolved.id, user.id);
    assert!(resolved.is_ceo());
  }

  #[tokio::test]
  async fn test_rejects_malformed_token() {
    let use_case = GetCurrentUserUseCase::new(Arc::new(AuthService::new(
      Arc::new(InMemoryUserRepository::new()),
      Arc::new(InMemorySessionRepository::new()),
    )));

    let result = use_case.execute("not-a-token".to_string()).await;

    assert!(matches!(result, Err(AuthError::ValueObject(_))));
  }
}
