use async_trait::async_trait;

use crate::user::application::{
    domain::entities::{User, UserActivity, VideoHistory},
    ports::{
        incoming::use_cases::{UpdateUserCommand, UpdateUserError, UpdateUserUseCase},
        outgoing::{UserRepository, UserRepositoryError},
    },
};

#[derive(Debug, Clone)]
pub struct UpdateUserService<R>
where
    R: UserRepository,
{
    repository: R,
}

impl<R> UpdateUserService<R>
where
    R: UserRepository,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> UpdateUserUseCase for UpdateUserService<R>
where
    R: UserRepository + Send + Sync,
{
    async fn execute(&self, command: UpdateUserCommand) -> Result<User, UpdateUserError> {
        let activity = UserActivity {
            watched: command.watched().map(|video_id| VideoHistory {
                video_id: video_id.clone(),
                date: chrono::Utc::now(),
            }),
            add_bookmark: command.add_bookmark().cloned(),
            remove_bookmark: command.remove_bookmark().cloned(),
        };

        self.repository
            .record_activity(command.token(), activity)
            .await
            .map_err(|e| match e {
                UserRepositoryError::UserNotFound => UpdateUserError::UserNotFound,
                other => UpdateUserError::RepositoryError(other.to_string()),
            })
    }
}
