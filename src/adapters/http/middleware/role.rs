use actix_web::{
  Error, HttpMessage, ResponseError,
  body::EitherBody,
  dev::{Service, ServiceRequest, ServiceResponse, Transform, forward_ready},
};
use futures_util::future::LocalBoxFuture;
use std::{
  future::{Ready, ready},
  rc::Rc,
};

use crate::{
  adapters::http::errors::{ApiError, AuthErrorKind},
  domain::auth::entities::{User, UserRole},
};

/// Role guard; must be registered inside `AuthMiddleware`
///
/// Answers 403 when the authenticated user lacks the role, and 401 when no
/// user was attached to the request at all.
#[derive(Debug, Clone, Copy)]
pub struct RequireRole {
  role: UserRole,
}

impl RequireRole {
  pub fn new(role: UserRole) -> Self {
    Self { role }
  }
}

impl<S, B> Transform<S, ServiceRequest> for RequireRole
where
  S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
  S::Future: 'static,
  B: 'static,
{
  type Response = ServiceResponse<EitherBody<B>>;
  type Error = Error;
  type Transform = RequireRoleService<S>;
  type InitError = ();
  type Future = Ready<Result<Self::Transform, Self::InitError>>;

  fn new_transform(&self, service: S) -> Self::Future {
    ready(Ok(RequireRoleService {
      service: Rc::new(service),
      role: self.role,
    }))
  }
}

pub struct RequireRoleService<S> {
  service: Rc<S>,
  role: UserRole,
}

impl<S, B> Service<ServiceRequest> for RequireRoleService<S>
where
  S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
  S::Future: 'static,
  B: 'static,
{
  type Response = ServiceResponse<EitherBody<B>>;
  type Error = Error;
  type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

  forward_ready!(service);

  fn call(&self, req: ServiceRequest) -> Self::Future {
    let service = Rc::clone(&self.service);
    let verdict = check_role(req.extensions().get::<User>(), self.role);

    Box::pin(async move {
      if let Err(e) = verdict {
        tracing::warn!(path = %req.path(), "Role check failed: {}", e);
        let (request, _) = req.into_parts();
        let response = e.error_response().map_into_right_body();
        return Ok(ServiceResponse::new(request, response));
      }

      let res = service.call(req).await?;
      Ok(res.map_into_left_body())
    })
  }
}

fn check_role(user: Option<&User>, role: UserRole) -> Result<(), ApiError> {
  match user {
    None => Err(ApiError::Auth(AuthErrorKind::InvalidSession)),
    Some(user) if user.has_role(role) => Ok(()),
    Some(_) => Err(ApiError::Auth(AuthErrorKind::Forbidden)),
  }
}
