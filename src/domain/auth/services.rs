use std::sync::Arc;

use super::entities::User;
use super::errors::AuthError;
use super::ports::{SessionRepository, UserRepository};
use super::value_objects::SessionToken;

/// Resolves bearer tokens issued by the identity service to users
pub struct AuthService {
  user_repo: Arc<dyn UserRepository>,
  session_repo: Arc<dyn SessionRepository>,
}

impl AuthService {
  /// Creates a new instance of AuthService
  pub fn new(user_repo: Arc<dyn UserRepository>, session_repo: Arc<dyn SessionRepository>) -> Self {
    Self {
      user_repo,
      session_repo,
    }
  }

  /// Validates a session token and returns the associated user
  ///
  /// # Errors
  /// Returns `AuthError::InvalidSession` if session is unknown or expired,
  /// `AuthError::UserNotFound` if the session outlived its user
  pub async fn validate_session(&self, token: SessionToken) -> Result<User, AuthError> {
    let token_hash = token.hash();

    let session = self
      .session_repo
      .find_by_token_hash(token_hash.as_str())
      .await?
      .ok_or(AuthError::InvalidSession)?;

    if session.is_expired() {
      tracing::debug!(session_id = %session.id, "Removing expired session");
      self.session_repo.delete(session.id).await?;
      return Err(AuthError::InvalidSession);
    }

    self
      .user_repo
      .find_by_id(session.user_id)
      .await?
      .ok_or(AuthError::UserNotFound)
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::domain::auth::entities::{Session, UserRole};
  use crate::infrastructure::persistence::memory::{
    InMemorySessionRepository, InMemoryUserRepository,
  };
  use chrono::Duration;

  fn service() -> (
    AuthService,
    Arc<InMemoryUserRepository>,
    Arc<InMemorySessionRepository>,
  ) {
    let users = Arc::new(InMemoryUserRepository::new());
    let sessions = Arc::new(InMemorySessionRepository::new());
    (
      AuthService::new(users.clone(), sessions.clone()),
      users,
      sessions,
    )
  }

  #[tokio::test]
  async fn test_validate_session_returns_user() {
    let (service, users, sessions) = service();
    let user = users
      .create(User::new("alice".into(), None, UserRole::User))
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

    let resolved = service.validate_session(token).await.unwrap();
    assert_eq!(resolved.id, user.id);
  }

  #[tokio::test]
  async fn test_unknown_token_is_rejected() {
    let (service, _, _) = service();
    let token = SessionToken::generate().unwrap();

    let result = service.validate_session(token).await;
    assert!(matches!(result, Err(AuthError::InvalidSession)));
  }

  #[tokio::test]
  async fn test_expired_session_is_rejected_and_removed() {
    let (service, users, sessions) = service();
    let user = users
      .create(User::new("bob".into(), None, UserRole::User))
      .await
      .unwrap();
    let token = SessionToken::generate().unwrap();
    sessions
      .create(Session::with_duration(
        user.id,
        token.hash().into_inner(),
        Duration::minutes(-5),
      ))
      .await
      .unwrap();

    let result = service.validate_session(token.clone()).await;
    assert!(matches!(result, Err(AuthError::InvalidSession)));

    let remaining = sessions
      .find_by_token_hash(token.hash().as_str())
      .await
      .unwrap();
    assert!(remaining.is_none());
  }

  #[tokio::test]
  async fn test_session_without_user() {
    let (service, _, sessions) = service();
    let token = SessionToken::generate().unwrap();
    sessions
      .create(Session::with_duration(
        uuid::Uuid::new_v4(),
        token.hash().into_inner(),
        Duration::hours(1),
      ))
      .await
      .unwrap();

    let result = service.validate_session(token).await;
    assert!(matches!(result, Err(AuthError::UserNotFound)));
  }
}
