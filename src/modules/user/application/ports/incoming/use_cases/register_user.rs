use async_trait::async_trait;
use email_address::EmailAddress;

use crate::shared::validation::{require, require_verbatim, MissingField};
use crate::user::application::domain::entities::User;

//
// ──────────────────────────────────────────────────────────
// Register User Command
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone)]
pub struct RegisterUserCommand {
    email: String,
    username: String,
    password: String,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RegisterUserCommandError {
    #[error(transparent)]
    MissingField(#[from] MissingField),

    #[error("Invalid email format")]
    InvalidEmail,
}

impl RegisterUserCommand {
    pub fn new(
        email: Option<String>,
        username: Option<String>,
        password: Option<String>,
    ) -> Result<Self, RegisterUserCommandError> {
        let email = require("email", email)?;
        let username = require("username", username)?;
        let password = require_verbatim("password", password)?;

        if !EmailAddress::is_valid(&email) {
            return Err(RegisterUserCommandError::InvalidEmail);
        }

        Ok(Self {
            email: email.to_lowercase(),
            username,
            password,
        })
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn password(&self) -> &str {
        &self.password
    }
}

//
// ──────────────────────────────────────────────────────────
// Use Case Error
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, thiserror::Error)]
pub enum RegisterUserError {
    #[error("Email already exists")]
    EmailAlreadyExists,

    #[error("Password hashing failed: {0}")]
    HashingFailed(String),

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

//
// ──────────────────────────────────────────────────────────
// Incoming Port (Use Case)
// ──────────────────────────────────────────────────────────
//

#[async_trait]
pub trait RegisterUserUseCase: Send + Sync {
    async fn execute(&self, command: RegisterUserCommand) -> Result<User, RegisterUserError>;
}
