use async_trait::async_trait;

use crate::user::application::{
    domain::entities::{AccessToken, User},
    ports::{
        incoming::use_cases::{GetMyInfoError, GetMyInfoUseCase},
        outgoing::UserQuery,
    },
};

#[derive(Debug, Clone)]
pub struct GetMyInfoService<Q>
where
    Q: UserQuery,
{
    query: Q,
}

impl<Q> GetMyInfoService<Q>
where
    Q: UserQuery,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> GetMyInfoUseCase for GetMyInfoService<Q>
where
    Q: UserQuery + Send + Sync,
{
    async fn execute(&self, token: AccessToken) -> Result<User, GetMyInfoError> {
        self.query
            .find_by_token(&token)
            .await
            .map_err(|e| GetMyInfoError::QueryError(e.to_string()))?
            .ok_or(GetMyInfoError::InvalidToken)
    }
}
