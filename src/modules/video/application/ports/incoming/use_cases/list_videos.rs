use async_trait::async_trait;

use crate::video::application::{domain::entities::Video, ports::outgoing::VideoListFilter};

#[derive(Debug, Clone, thiserror::Error)]
pub enum ListVideosError {
    #[error("Failed to fetch videos: {0}")]
    QueryFailed(String),
}

#[async_trait]
pub trait ListVideosUseCase: Send + Sync {
    async fn execute(&self, filter: VideoListFilter) -> Result<Vec<Video>, ListVideosError>;
}
