use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::user::application::domain::entities::UserId;
use crate::video::application::{
    domain::entities::{Video, VideoId},
    ports::outgoing::{
        CreateVideoData, VideoListFilter, VideoQuery, VideoQueryError, VideoRepository,
        VideoRepositoryError,
    },
};

pub fn sample_video(id: &str, author: &str) -> Video {
    Video {
        id: VideoId::new(id),
        title: "Intro to Rust".to_string(),
        content: "Ownership and borrowing".to_string(),
        url: "https://cdn.example.com/rust.mp4".to_string(),
        author_id: UserId::new(author),
        created_at: Utc::now(),
        deleted_at: None,
        comments: vec![],
    }
}

// ──────────────────────────────────────────────────────────
// Mock Query
// ──────────────────────────────────────────────────────────

#[derive(Debug, Clone)]
pub struct MockVideoQuery {
    pub videos: Result<Vec<Video>, VideoQueryError>,
}

impl MockVideoQuery {
    pub fn with(videos: Vec<Video>) -> Self {
        Self { videos: Ok(videos) }
    }

    pub fn db_error(msg: &str) -> Self {
        Self {
            videos: Err(VideoQueryError::DatabaseError(msg.to_string())),
        }
    }
}

#[async_trait]
impl VideoQuery for MockVideoQuery {
    async fn list(&self, filter: VideoListFilter) -> Result<Vec<Video>, VideoQueryError> {
        let videos = self.videos.clone()?;
        Ok(videos
            .into_iter()
            .filter(|v| match &filter {
                VideoListFilter::All => true,
                VideoListFilter::Author(author) => &v.author_id == author,
            })
            .collect())
    }

    async fn find_by_id(&self, video_id: &VideoId) -> Result<Option<Video>, VideoQueryError> {
        let videos = self.videos.clone()?;
        Ok(videos.into_iter().find(|v| &v.id == video_id))
    }
}

// ──────────────────────────────────────────────────────────
// Mock Repository
// ──────────────────────────────────────────────────────────

#[derive(Debug, Clone)]
pub struct MockVideoRepository {
    pub result: Result<Video, VideoRepositoryError>,
}

impl MockVideoRepository {
    pub fn success(video: Video) -> Self {
        Self { result: Ok(video) }
    }

    pub fn not_found() -> Self {
        Self {
            result: Err(VideoRepositoryError::VideoNotFound),
        }
    }

    pub fn db_error(msg: &str) -> Self {
        Self {
            result: Err(VideoRepositoryError::DatabaseError(msg.to_string())),
        }
    }
}

#[async_trait]
impl VideoRepository for MockVideoRepository {
    async fn create_video(&self, data: CreateVideoData) -> Result<Video, VideoRepositoryError> {
        let mut video = self.result.clone()?;
        video.title = data.title;
        video.content = data.content;
        video.url = data.url;
        video.author_id = data.author_id;
        video.created_at = data.created_at;
        Ok(video)
    }

    async fn soft_delete_owned(
        &self,
        _video_id: &VideoId,
        _author_id: &UserId,
        at: DateTime<Utc>,
    ) -> Result<Video, VideoRepositoryError> {
        let mut video = self.result.clone()?;
        video.deleted_at = Some(at);
        Ok(video)
    }

    async fn push_comment(
        &self,
        _video_id: &VideoId,
        comment: String,
    ) -> Result<Video, VideoRepositoryError> {
        let mut video = self.result.clone()?;
        video.comments.push(comment);
        Ok(video)
    }
}
