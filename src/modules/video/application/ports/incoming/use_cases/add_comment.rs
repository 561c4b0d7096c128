use async_trait::async_trait;

use crate::shared::validation::{require, MissingField};
use crate::video::application::domain::entities::{Video, VideoId};

#[derive(Debug, Clone)]
pub struct AddCommentCommand {
    video_id: VideoId,
    content: String,
}

impl AddCommentCommand {
    pub fn new(video_id: Option<String>, content: Option<String>) -> Result<Self, MissingField> {
        Ok(Self {
            video_id: VideoId::new(require("video_id", video_id)?),
            content: require("content", content)?,
        })
    }

    pub fn video_id(&self) -> &VideoId {
        &self.video_id
    }

    pub fn content(&self) -> &str {
        &self.content
    }
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum AddCommentError {
    #[error("Video not found")]
    VideoNotFound,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait AddCommentUseCase: Send + Sync {
    async fn execute(&self, command: AddCommentCommand) -> Result<Video, AddCommentError>;
}
