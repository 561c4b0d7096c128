use async_trait::async_trait;

use crate::shared::validation::{optional, require, MissingField};
use crate::user::application::domain::entities::{AccessToken, User};
use crate::video::application::domain::entities::VideoId;

/// Token plus the optional history/bookmark changes of one update request.
/// Blank optional fields are treated as absent.
#[derive(Debug, Clone)]
pub struct UpdateUserCommand {
    token: AccessToken,
    watched: Option<VideoId>,
    add_bookmark: Option<VideoId>,
    remove_bookmark: Option<VideoId>,
}

impl UpdateUserCommand {
    pub fn new(
        token: Option<String>,
        video_history: Option<String>,
        add_bookmark: Option<String>,
        delete_bookmark: Option<String>,
    ) -> Result<Self, MissingField> {
        let token = AccessToken::new(require("token", token)?);

        Ok(Self {
            token,
            watched: optional(video_history).map(VideoId::from),
            add_bookmark: optional(add_bookmark).map(VideoId::from),
            remove_bookmark: optional(delete_bookmark).map(VideoId::from),
        })
    }

    pub fn token(&self) -> &AccessToken {
        &self.token
    }

    pub fn watched(&self) -> Option<&VideoId> {
        self.watched.as_ref()
    }

    pub fn add_bookmark(&self) -> Option<&VideoId> {
        self.add_bookmark.as_ref()
    }

    pub fn remove_bookmark(&self) -> Option<&VideoId> {
        self.remove_bookmark.as_ref()
    }
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum UpdateUserError {
    #[error("User not found")]
    UserNotFound,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait UpdateUserUseCase: Send + Sync {
    async fn execute(&self, command: UpdateUserCommand) -> Result<User, UpdateUserError>;
}
