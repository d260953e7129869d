use actix_web::{HttpResponse, web};
use std::sync::Arc;

use crate::adapters::http::{
  dtos::{GetUserRequest, UserResponse},
  errors::ApiError,
  extractors::ValidatedJson,
};
use crate::application::users::{GetUserByNameCommand, GetUserByNameUseCase, ListUsersUseCase};

/// GET /users
///
/// Response: array of users
pub async fn list_users_handler(
  use_case: web::Data<Arc<ListUsersUseCase>>,
) -> Result<HttpResponse, ApiError> {
  let response = use_case.execute().await?;

  let users: Vec<UserResponse> = response.users.into_iter().map(UserResponse::from).collect();

  Ok(HttpResponse::Ok().json(users))
}

/// GET /user
///
/// Body: `{ "name": string }`
/// Response: the first user with that name, 404 if there is none
pub async fn get_user_by_name_handler(
  request: ValidatedJson<GetUserRequest>,
  use_case: web::Data<Arc<GetUserByNameUseCase>>,
) -> Result<HttpResponse, ApiError> {
  let command = GetUserByNameCommand {
    name: request.into_inner().name,
  };

  let user = use_case.execute(command).await?;

  Ok(HttpResponse::Ok().json(UserResponse::from(user)))
}
