use async_trait::async_trait;

use crate::shared::validation::{require, MissingField};
use crate::user::application::domain::entities::UserId;
use crate::video::application::domain::entities::Video;

#[derive(Debug, Clone)]
pub struct CreateVideoCommand {
    title: String,
    content: String,
    url: String,
    author_id: UserId,
}

impl CreateVideoCommand {
    pub fn new(
        title: Option<String>,
        content: Option<String>,
        url: Option<String>,
        author_id: Option<String>,
    ) -> Result<Self, MissingField> {
        Ok(Self {
            title: require("title", title)?,
            content: require("content", content)?,
            url: require("url", url)?,
            author_id: UserId::new(require("author_id", author_id)?),
        })
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn author_id(&self) -> &UserId {
        &self.author_id
    }
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum CreateVideoError {
    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait CreateVideoUseCase: Send + Sync {
    async fn execute(&self, command: CreateVideoCommand) -> Result<Video, CreateVideoError>;
}
