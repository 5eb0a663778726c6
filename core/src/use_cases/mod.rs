//! Application use cases orchestrating domain objects and repositories.
//!
//! Every use case returns [`UseCaseError`], which carries the HTTP status a
//! transport layer should answer with.

mod create_user;
mod delete_user;
mod dto;
mod errors;
mod get_user;
mod list_users;
mod login;
mod send_email_verification;
mod update_user;
mod verify_email;


pub use create_user::{CreateUser, CreateUserParams};
pub use delete_user::DeleteUser;
pub use dto::{AuthTokens, UserDto};
pub use errors::UseCaseError;
pub use get_user::GetUser;
pub use list_users::ListUsers;
pub use login::Login;
pub use send_email_verification::SendEmailVerification;
pub use update_user::UpdateUser;
pub use verify_email::VerifyEmail;
