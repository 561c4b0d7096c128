use chrono::{DateTime, Utc};
use serde::Serialize;
use utoipa::ToSchema;

use crate::video::application::domain::entities::Video;

#[derive(Debug, Serialize, ToSchema)]
pub struct VideoView {
    #[schema(example = "65f1c0a2b3d4e5f6012345aa")]
    pub id: String,

    #[schema(example = "Intro to Rust")]
    pub title: String,

    pub content: String,

    #[schema(example = "https://cdn.example.com/rust.mp4")]
    pub url: String,

    #[schema(example = "65f1c0a2b3d4e5f601234567")]
    pub author_id: String,

    pub created: DateTime<Utc>,

    /// Only present on a soft-deleted video
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deleted: Option<DateTime<Utc>>,

    pub comments: Vec<String>,
}

impl From<Video> for VideoView {
    fn from(video: Video) -> Self {
        Self {
            id: video.id.to_string(),
            title: video.title,
            content: video.content,
            url: video.url,
            author_id: video.author_id.to_string(),
            created: video.created_at,
            deleted: video.deleted_at,
            comments: video.comments,
        }
    }
}
