use async_trait::async_trait;

use crate::video::application::{
    domain::entities::Video,
    ports::{
        incoming::use_cases::{AddCommentCommand, AddCommentError, AddCommentUseCase},
        outgoing::{VideoRepository, VideoRepositoryError},
    },
};

#[derive(Debug, Clone)]
pub struct AddCommentService<R>
where
    R: VideoRepository,
{
    repository: R,
}

impl<R> AddCommentService<R>
where
    R: VideoRepository,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> AddCommentUseCase for AddCommentService<R>
where
    R: VideoRepository + Send + Sync,
{
    async fn execute(&self, command: AddCommentCommand) -> Result<Video, AddCommentError> {
        self.repository
            .push_comment(command.video_id(), command.content().to_string())
            .await
            .map_err(|e| match e {
                VideoRepositoryError::VideoNotFound => AddCommentError::VideoNotFound,
                VideoRepositoryError::DatabaseError(msg) => AddCommentError::RepositoryError(msg),
            })
    }
}
