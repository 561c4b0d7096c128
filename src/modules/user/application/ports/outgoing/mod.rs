pub mod password_hasher;
pub mod token_generator;
mod user_query;
mod user_repository;

pub use password_hasher::{HashError, PasswordHasher};
pub use token_generator::TokenGenerator;
pub use user_query::{UserQuery, UserQueryError};
pub use user_repository::{CreateUserData, UserRepository, UserRepositoryError};
