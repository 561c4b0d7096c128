use async_trait::async_trait;

use crate::user::application::domain::entities::{AccessToken, User};

#[derive(Debug, Clone, thiserror::Error)]
pub enum GetMyInfoError {
    #[error("Invalid token")]
    InvalidToken,

    #[error("Query error: {0}")]
    QueryError(String),
}

#[async_trait]
pub trait GetMyInfoUseCase: Send + Sync {
    async fn execute(&self, token: AccessToken) -> Result<User, GetMyInfoError>;
}
