use async_trait::async_trait;

use crate::video::application::{
    domain::entities::{Video, VideoId},
    ports::{
        incoming::use_cases::{GetVideoError, GetVideoUseCase},
        outgoing::VideoQuery,
    },
};

pub struct GetVideoService<Q>
where
    Q: VideoQuery,
{
    query: Q,
}

impl<Q> GetVideoService<Q>
where
    Q: VideoQuery,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> GetVideoUseCase for GetVideoService<Q>
where
    Q: VideoQuery + Send + Sync,
{
    async fn execute(&self, video_id: VideoId) -> Result<Video, GetVideoError> {
        self.query
            .find_by_id(&video_id)
            .await
            .map_err(|e| GetVideoError::RepositoryError(e.to_string()))?
            .ok_or(GetVideoError::NotFound)
    }
}
