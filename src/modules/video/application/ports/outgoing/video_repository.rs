use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::user::application::domain::entities::UserId;
use crate::video::application::domain::entities::{Video, VideoId};

#[derive(Debug, Clone)]
pub struct CreateVideoData {
    pub title: String,
    pub content: String,
    pub url: String,
    pub author_id: UserId,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum VideoRepositoryError {
    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Video not found")]
    VideoNotFound,
}

#[async_trait]
pub trait VideoRepository: Send + Sync {
    async fn create_video(&self, data: CreateVideoData) -> Result<Video, VideoRepositoryError>;

    /// Sets the delete marker only on a live video owned by `author_id`.
    /// Anything else is `VideoNotFound`.
    async fn soft_delete_owned(
        &self,
        video_id: &VideoId,
        author_id: &UserId,
        at: DateTime<Utc>,
    ) -> Result<Video, VideoRepositoryError>;

    /// Appends to the comment list of a live video.
    async fn push_comment(
        &self,
        video_id: &VideoId,
        comment: String,
    ) -> Result<Video, VideoRepositoryError>;
}
