use std::sync::Arc;

use crate::user::application::{
    ports::{
        incoming::use_cases::{
            GetMyInfoUseCase, LoginUserUseCase, RegisterUserUseCase, UpdateUserUseCase,
        },
        outgoing::{PasswordHasher, TokenGenerator, UserQuery, UserRepository},
    },
    services::{GetMyInfoService, LoginUserService, RegisterUserService, UpdateUserService},
};

#[derive(Clone)]
pub struct UserUseCases {
    pub register: Arc<dyn RegisterUserUseCase + Send + Sync>,
    pub login: Arc<dyn LoginUserUseCase + Send + Sync>,
    pub get_my_info: Arc<dyn GetMyInfoUseCase + Send + Sync>,
    pub update: Arc<dyn UpdateUserUseCase + Send + Sync>,
}

impl UserUseCases {
    /// Builds every user service over the same store adapters.
    pub fn wire<Q, R>(
        query: Q,
        repository: R,
        password_hasher: Arc<dyn PasswordHasher>,
        token_generator: Arc<dyn TokenGenerator>,
    ) -> Self
    where
        Q: UserQuery + Clone + 'static,
        R: UserRepository + Clone + 'static,
    {
        Self {
            register: Arc::new(RegisterUserService::new(
                query.clone(),
                repository.clone(),
                Arc::clone(&password_hasher),
                token_generator,
            )),
            login: Arc::new(LoginUserService::new(query.clone(), password_hasher)),
            get_my_info: Arc::new(GetMyInfoService::new(query)),
            update: Arc::new(UpdateUserService::new(repository)),
        }
    }
}
