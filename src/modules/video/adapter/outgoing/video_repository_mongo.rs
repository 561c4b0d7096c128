use async_trait::async_trait;
use chrono::{DateTime, Utc};
use mongodb::{bson::doc, options::ReturnDocument, Collection, Database};
use tracing::debug;

use super::video_document::{live_by_id, live_owned_by, VideoDocument};
use crate::shared::mongo::{parse_object_id, to_bson_date, VIDEOS_COLLECTION};
use crate::user::application::domain::entities::UserId;
use crate::video::application::{
    domain::entities::{Video, VideoId},
    ports::outgoing::{CreateVideoData, VideoRepository, VideoRepositoryError},
};

#[derive(Clone, Debug)]
pub struct VideoRepositoryMongo {
    videos: Collection<VideoDocument>,
}

impl VideoRepositoryMongo {
    pub fn new(db: &Database) -> Self {
        Self {
            videos: db.collection(VIDEOS_COLLECTION),
        }
    }
}

#[async_trait]
impl VideoRepository for VideoRepositoryMongo {
    async fn create_video(&self, data: CreateVideoData) -> Result<Video, VideoRepositoryError> {
        let document = VideoDocument::from_new(data);

        self.videos
            .insert_one(&document)
            .await
            .map_err(|e| VideoRepositoryError::DatabaseError(e.to_string()))?;

        Ok(document.into_video())
    }

    async fn soft_delete_owned(
        &self,
        video_id: &VideoId,
        author_id: &UserId,
        at: DateTime<Utc>,
    ) -> Result<Video, VideoRepositoryError> {
        let id = parse_object_id(video_id.as_str()).ok_or(VideoRepositoryError::VideoNotFound)?;
        debug!(video_id = %video_id, author_id = %author_id, "Soft deleting video");

        self.videos
            .find_one_and_update(
                live_owned_by(id, author_id),
                doc! { "$set": { "deleted": to_bson_date(at) } },
            )
            .return_document(ReturnDocument::After)
            .await
            .map_err(|e| VideoRepositoryError::DatabaseError(e.to_string()))?
            .map(VideoDocument::into_video)
            .ok_or(VideoRepositoryError::VideoNotFound)
    }

    async fn push_comment(
        &self,
        video_id: &VideoId,
        comment: String,
    ) -> Result<Video, VideoRepositoryError> {
        let id = parse_object_id(video_id.as_str()).ok_or(VideoRepositoryError::VideoNotFound)?;

        self.videos
            .find_one_and_update(live_by_id(id), doc! { "$push": { "comments": comment } })
            .return_document(ReturnDocument::After)
            .await
            .map_err(|e| VideoRepositoryError::DatabaseError(e.to_string()))?
            .map(VideoDocument::into_video)
            .ok_or(VideoRepositoryError::VideoNotFound)
    }
}
