use async_trait::async_trait;

use crate::shared::validation::{require, require_verbatim, MissingField};
use crate::user::application::domain::entities::AccessToken;

#[derive(Debug, Clone)]
pub struct LoginCommand {
    email: String,
    password: String,
}

impl LoginCommand {
    pub fn new(email: Option<String>, password: Option<String>) -> Result<Self, MissingField> {
        let email = require("email", email)?.to_lowercase();
        let password = require_verbatim("password", password)?;

        Ok(Self { email, password })
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn password(&self) -> &str {
        &self.password
    }
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum LoginError {
    #[error("User not found")]
    UserNotFound,

    #[error("Invalid password")]
    InvalidPassword,

    #[error("Password verification failed: {0}")]
    PasswordVerificationFailed(String),

    #[error("Query error: {0}")]
    QueryError(String),
}

#[async_trait]
pub trait LoginUserUseCase: Send + Sync {
    /// Returns the account's persistent token; no new token is issued.
    async fn execute(&self, command: LoginCommand) -> Result<AccessToken, LoginError>;
}
