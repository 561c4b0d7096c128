use async_trait::async_trait;

use crate::video::application::{
    domain::entities::Video,
    ports::{
        incoming::use_cases::{ListVideosError, ListVideosUseCase},
        outgoing::{VideoListFilter, VideoQuery},
    },
};

#[derive(Debug, Clone)]
pub struct ListVideosService<Q>
where
    Q: VideoQuery,
{
    query: Q,
}

impl<Q> ListVideosService<Q>
where
    Q: VideoQuery,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> ListVideosUseCase for ListVideosService<Q>
where
    Q: VideoQuery + Send + Sync,
{
    async fn execute(&self, filter: VideoListFilter) -> Result<Vec<Video>, ListVideosError> {
        self.query
            .list(filter)
            .await
            .map_err(|e| ListVideosError::QueryFailed(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::user::application::domain::entities::UserId;
    use crate::video::application::services::test_fixtures::{sample_video, MockVideoQuery};

    #[tokio::test]
    async fn lists_all_videos() {
        let query = MockVideoQuery::with(vec![sample_video("v1", "a"), sample_video("v2", "b")]);
        let service = ListVideosService::new(query);

        let videos = service.execute(VideoListFilter::All).await.unwrap();

        assert_eq!(videos.len(), 2);
    }

    #[tokio::test]
    async fn lists_by_author() {
        let query = MockVideoQuery::with(vec![sample_video("v1", "a"), sample_video("v2", "b")]);
        let service = ListVideosService::new(query);

        let videos = service
            .execute(VideoListFilter::Author(UserId::new("b")))
            .await
            .unwrap();

        assert_eq!(videos.len(), 1);
        assert_eq!(videos[0].id.as_str(), "v2");
    }

    #[tokio::test]
    async fn query_error_is_mapped() {
        let service = ListVideosService::new(MockVideoQuery::db_error("cursor died"));

        let result = service.execute(VideoListFilter::All).await;

        assert!(matches!(result, Err(ListVideosError::QueryFailed(_))));
    }
}
