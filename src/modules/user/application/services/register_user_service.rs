use async_trait::async_trait;
use std::sync::Arc;

use crate::user::application::{
    domain::entities::User,
    ports::{
        incoming::use_cases::{RegisterUserCommand, RegisterUserError, RegisterUserUseCase},
        outgoing::{
            CreateUserData, PasswordHasher, TokenGenerator, UserQuery, UserRepository,
            UserRepositoryError,
        },
    },
};

#[derive(Clone)]
pub struct RegisterUserService<Q, R>
where
    Q: UserQuery,
    R: UserRepository,
{
    query: Q,
    repository: R,
    password_hasher: Arc<dyn PasswordHasher>,
    token_generator: Arc<dyn TokenGenerator>,
}

impl<Q, R> RegisterUserService<Q, R>
where
    Q: UserQuery,
    R: UserRepository,
{
    pub fn new(
        query: Q,
        repository: R,
        password_hasher: Arc<dyn PasswordHasher>,
        token_generator: Arc<dyn TokenGenerator>,
    ) -> Self {
        Self {
            query,
            repository,
            password_hasher,
            token_generator,
        }
    }
}

#[async_trait]
impl<Q, R> RegisterUserUseCase for RegisterUserService<Q, R>
where
    Q: UserQuery + Send + Sync,
    R: UserRepository + Send + Sync,
{
    async fn execute(&self, command: RegisterUserCommand) -> Result<User, RegisterUserError> {
        // 1️⃣ Reject known emails early; the unique index still guards the insert
        let taken = self
            .query
            .email_exists(command.email())
            .await
            .map_err(|e| RegisterUserError::RepositoryError(e.to_string()))?;

        if taken {
            return Err(RegisterUserError::EmailAlreadyExists);
        }

        // 2️⃣ Hash password
        let password_hash = self
            .password_hasher
            .hash_password(command.password())
            .await
            .map_err(|e| RegisterUserError::HashingFailed(e.to_string()))?;

        // 3️⃣ Persist with a fresh random token
        let data = CreateUserData {
            email: command.email().to_string(),
            username: command.username().to_string(),
            password_hash,
            token: self.token_generator.generate(),
            created_at: chrono::Utc::now(),
        };

        self.repository
            .create_user(data)
            .await
            .map_err(|e| match e {
                UserRepositoryError::UserAlreadyExists => RegisterUserError::EmailAlreadyExists,
                other => RegisterUserError::RepositoryError(other.to_string()),
            })
    }
}
