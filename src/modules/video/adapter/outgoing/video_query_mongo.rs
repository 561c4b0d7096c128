use async_trait::async_trait;
use futures::TryStreamExt;
use mongodb::{Collection, Database};

use super::video_document::{live_by_id, live_filter, newest_first, VideoDocument};
use crate::shared::mongo::{parse_object_id, VIDEOS_COLLECTION};
use crate::video::application::{
    domain::entities::{Video, VideoId},
    ports::outgoing::{VideoListFilter, VideoQuery, VideoQueryError},
};

#[derive(Clone, Debug)]
pub struct VideoQueryMongo {
    videos: Collection<VideoDocument>,
}

impl VideoQueryMongo {
    pub fn new(db: &Database) -> Self {
        Self {
            videos: db.collection(VIDEOS_COLLECTION),
        }
    }
}

#[async_trait]
impl VideoQuery for VideoQueryMongo {
    async fn list(&self, filter: VideoListFilter) -> Result<Vec<Video>, VideoQueryError> {
        let cursor = self
            .videos
            .find(live_filter(&filter))
            .sort(newest_first())
            .await
            .map_err(|e| VideoQueryError::DatabaseError(e.to_string()))?;

        let documents: Vec<VideoDocument> = cursor
            .try_collect()
            .await
            .map_err(|e| VideoQueryError::DatabaseError(e.to_string()))?;

        Ok(documents.into_iter().map(VideoDocument::into_video).collect())
    }

    async fn find_by_id(&self, video_id: &VideoId) -> Result<Option<Video>, VideoQueryError> {
        let Some(id) = parse_object_id(video_id.as_str()) else {
            return Ok(None);
        };

        let found = self
            .videos
            .find_one(live_by_id(id))
            .await
            .map_err(|e| VideoQueryError::DatabaseError(e.to_string()))?;

        Ok(found.map(VideoDocument::into_video))
    }
}
