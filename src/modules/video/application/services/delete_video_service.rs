use async_trait::async_trait;

use crate::video::application::{
    domain::entities::Video,
    ports::{
        incoming::use_cases::{DeleteVideoCommand, DeleteVideoError, DeleteVideoUseCase},
        outgoing::{VideoRepository, VideoRepositoryError},
    },
};

#[derive(Debug, Clone)]
pub struct DeleteVideoService<R>
where
    R: VideoRepository,
{
    repository: R,
}

impl<R> DeleteVideoService<R>
where
    R: VideoRepository,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> DeleteVideoUseCase for DeleteVideoService<R>
where
    R: VideoRepository + Send + Sync,
{
    async fn execute(&self, command: DeleteVideoCommand) -> Result<Video, DeleteVideoError> {
        // Ownership and liveness are part of the update filter, so a
        // non-owner sees the same outcome as a missing video.
        self.repository
            .soft_delete_owned(command.video_id(), command.requester(), chrono::Utc::now())
            .await
            .map_err(|e| match e {
                VideoRepositoryError::VideoNotFound => DeleteVideoError::VideoNotFound,
                VideoRepositoryError::DatabaseError(msg) => DeleteVideoError::RepositoryError(msg),
            })
    }
}
