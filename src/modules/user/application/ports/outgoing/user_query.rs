use async_trait::async_trait;

use crate::user::application::domain::entities::{AccessToken, User};

#[derive(Debug, Clone, thiserror::Error)]
pub enum UserQueryError {
    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait UserQuery: Send + Sync {
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, UserQueryError>;

    async fn find_by_token(&self, token: &AccessToken) -> Result<Option<User>, UserQueryError>;

    async fn email_exists(&self, email: &str) -> Result<bool, UserQueryError>;
}
