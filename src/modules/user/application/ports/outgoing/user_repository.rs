use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::user::application::domain::entities::{AccessToken, User, UserActivity};

// Input DTO for creating a user; the store assigns the id
#[derive(Debug, Clone)]
pub struct CreateUserData {
    pub email: String,
    pub username: String,
    pub password_hash: String,
    pub token: AccessToken,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum UserRepositoryError {
    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("User not found")]
    UserNotFound,

    #[error("User already exists")]
    UserAlreadyExists,
}

#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn create_user(&self, data: CreateUserData) -> Result<User, UserRepositoryError>;

    /// Applies every change in `activity` to the user owning `token` as one
    /// atomic update and returns the updated user.
    async fn record_activity(
        &self,
        token: &AccessToken,
        activity: UserActivity,
    ) -> Result<User, UserRepositoryError>;
}
