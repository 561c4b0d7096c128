use async_trait::async_trait;
use std::sync::Arc;

use crate::user::application::{
    domain::entities::AccessToken,
    ports::{
        incoming::use_cases::{LoginCommand, LoginError, LoginUserUseCase},
        outgoing::{PasswordHasher, UserQuery},
    },
};

#[derive(Clone)]
pub struct LoginUserService<Q>
where
    Q: UserQuery,
{
    query: Q,
    password_hasher: Arc<dyn PasswordHasher>,
}

impl<Q> LoginUserService<Q>
where
    Q: UserQuery,
{
    pub fn new(query: Q, password_hasher: Arc<dyn PasswordHasher>) -> Self {
        Self {
            query,
            password_hasher,
        }
    }
}

#[async_trait]
impl<Q> LoginUserUseCase for LoginUserService<Q>
where
    Q: UserQuery + Send + Sync,
{
    async fn execute(&self, command: LoginCommand) -> Result<AccessToken, LoginError> {
        let user = self
            .query
            .find_by_email(command.email())
            .await
            .map_err(|e| LoginError::QueryError(e.to_string()))?
            .ok_or(LoginError::UserNotFound)?;

        let is_valid = self
            .password_hasher
            .verify_password(command.password(), &user.password_hash)
            .await
            .map_err(|e| LoginError::PasswordVerificationFailed(e.to_string()))?;

        if !is_valid {
            return Err(LoginError::InvalidPassword);
        }

        Ok(user.token)
    }
}
