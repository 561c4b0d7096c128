use async_trait::async_trait;

use crate::user::application::domain::entities::UserId;
use crate::video::application::domain::entities::{Video, VideoId};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VideoListFilter {
    All,
    Author(UserId),
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum VideoQueryError {
    #[error("Database error: {0}")]
    DatabaseError(String),
}

/// Read side of the video store. Soft-deleted videos are never returned.
#[async_trait]
pub trait VideoQuery: Send + Sync {
    /// Newest first.
    async fn list(&self, filter: VideoListFilter) -> Result<Vec<Video>, VideoQueryError>;

    async fn find_by_id(&self, video_id: &VideoId) -> Result<Option<Video>, VideoQueryError>;
}
