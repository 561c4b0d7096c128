use chrono::{DateTime, Utc};
use serde::Serialize;
use utoipa::ToSchema;

use crate::user::application::domain::entities::{User, VideoHistory};

/// Public representation of a user. The password hash never leaves the
/// service.
#[derive(Debug, Serialize, ToSchema)]
pub struct UserView {
    #[schema(example = "65f1c0a2b3d4e5f601234567")]
    pub id: String,

    #[schema(example = "jane@example.com")]
    pub email: String,

    #[schema(example = "jane")]
    pub username: String,

    pub created: DateTime<Utc>,

    /// Bearer token used by the `/user/*` endpoints
    #[schema(example = "q8ZrT0dYv3mWnK1pLs6cXbJ2hF9gA4eR7uIoP5tN0yQwEzVx")]
    pub token: String,

    pub history: Vec<HistoryView>,

    /// Bookmarked video ids
    pub bookmark: Vec<String>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct HistoryView {
    #[schema(example = "65f1c0a2b3d4e5f6012345aa")]
    pub video_id: String,
    pub date: DateTime<Utc>,
}

impl From<VideoHistory> for HistoryView {
    fn from(entry: VideoHistory) -> Self {
        Self {
            video_id: entry.video_id.to_string(),
            date: entry.date,
        }
    }
}

impl From<User> for UserView {
    fn from(user: User) -> Self {
        Self {
            id: user.id.to_string(),
            email: user.email,
            username: user.username,
            created: user.created_at,
            token: user.token.as_str().to_string(),
            history: user.history.into_iter().map(HistoryView::from).collect(),
            bookmark: user.bookmarks.iter().map(|id| id.to_string()).collect(),
        }
    }
}
