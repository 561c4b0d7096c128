use async_trait::async_trait;

use crate::shared::validation::{require, MissingField};
use crate::user::application::domain::entities::UserId;
use crate::video::application::domain::entities::{Video, VideoId};

/// Soft delete request; `requester` must be the video's author.
#[derive(Debug, Clone)]
pub struct DeleteVideoCommand {
    video_id: VideoId,
    requester: UserId,
}

impl DeleteVideoCommand {
    pub fn new(video_id: Option<String>, my_id: Option<String>) -> Result<Self, MissingField> {
        Ok(Self {
            video_id: VideoId::new(require("video_id", video_id)?),
            requester: UserId::new(require("my_id", my_id)?),
        })
    }

    pub fn video_id(&self) -> &VideoId {
        &self.video_id
    }

    pub fn requester(&self) -> &UserId {
        &self.requester
    }
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum DeleteVideoError {
    #[error("Video not found")]
    VideoNotFound,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait DeleteVideoUseCase: Send + Sync {
    async fn execute(&self, command: DeleteVideoCommand) -> Result<Video, DeleteVideoError>;
}
