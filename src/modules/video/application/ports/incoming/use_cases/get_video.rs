use async_trait::async_trait;

use crate::video::application::domain::entities::{Video, VideoId};

#[derive(Debug, Clone, thiserror::Error)]
pub enum GetVideoError {
    #[error("Video not found")]
    NotFound,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait GetVideoUseCase: Send + Sync {
    async fn execute(&self, video_id: VideoId) -> Result<Video, GetVideoError>;
}
