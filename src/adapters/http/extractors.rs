use actix_web::{FromRequest, HttpRequest, dev::Payload, web};
use futures_util::future::LocalBoxFuture;
use serde::de::DeserializeOwned;
use std::ops::Deref;
use validator::Validate;

use super::errors::ApiError;

/// JSON extractor that runs `validator` rules before the handler sees the body
///
/// Malformed JSON and rule violations are both rejected with 400.
#[derive(Debug)]
pub struct ValidatedJson<T>(pub T);

impl<T> ValidatedJson<T> {
  pub fn into_inner(self) -> T {
    self.0
  }
}

impl<T> Deref for ValidatedJson<T> {
  type Target = T;

  fn deref(&self) -> &T {
    &self.0
  }
}

impl<T> FromRequest for ValidatedJson<T>
where
  T: DeserializeOwned + Validate + 'static,
{
  type Error = ApiError;
  type Future = LocalBoxFuture<'static, Result<Self, Self::Error>>;

  fn from_request(req: &HttpRequest, payload: &mut Payload) -> Self::Future {
    let json = web::Json::<T>::from_request(req, payload);

    Box::pin(async move {
      let web::Json(value) = json
        .await
        .map_err(|e| ApiError::Validation(format!("Invalid request body: {}", e)))?;
      value.validate()?;
      Ok(ValidatedJson(value))
    })
  }
}
