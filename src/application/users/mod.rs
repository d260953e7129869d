//! User lookup use cases

mod get_user_by_name;
mod list_users;

pub use get_user_by_name::{GetUserByNameCommand, GetUserByNameUseCase};
pub use list_users::{ListUsersResponse, ListUsersUseCase};
