use async_trait::async_trait;

use crate::video::application::{
    domain::entities::Video,
    ports::{
        incoming::use_cases::{CreateVideoCommand, CreateVideoError, CreateVideoUseCase},
        outgoing::{CreateVideoData, VideoRepository},
    },
};

#[derive(Debug, Clone)]
pub struct CreateVideoService<R>
where
    R: VideoRepository + Send + Sync,
{
    repository: R,
}

impl<R> CreateVideoService<R>
where
    R: VideoRepository + Send + Sync,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> CreateVideoUseCase for CreateVideoService<R>
where
    R: VideoRepository + Send + Sync,
{
    async fn execute(&self, command: CreateVideoCommand) -> Result<Video, CreateVideoError> {
        let data = CreateVideoData {
            title: command.title().to_string(),
            content: command.content().to_string(),
            url: command.url().to_string(),
            author_id: command.author_id().clone(),
            created_at: chrono::Utc::now(),
        };

        self.repository
            .create_video(data)
            .await
            .map_err(|e| CreateVideoError::RepositoryError(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::video::application::services::test_fixtures::{sample_video, MockVideoRepository};

    fn command() -> CreateVideoCommand {
        CreateVideoCommand::new(
            Some("Borrowck".to_string()),
            Some("Lifetimes explained".to_string()),
            Some("https://cdn.example.com/b.mp4".to_string()),
            Some("author-1".to_string()),
        )
        .unwrap()
    }

    #[tokio::test]
    async fn create_video_success() {
        let repo = MockVideoRepository::success(sample_video("v1", "ignored"));
        let service = CreateVideoService::new(repo);

        let video = service.execute(command()).await.unwrap();

        assert_eq!(video.title, "Borrowck");
        assert_eq!(video.author_id.as_str(), "author-1");
        assert!(video.comments.is_empty());
        assert!(!video.is_deleted());
    }

    #[tokio::test]
    async fn create_video_repository_error_is_mapped() {
        let service = CreateVideoService::new(MockVideoRepository::db_error("insert failed"));

        match service.execute(command()).await {
            Err(CreateVideoError::RepositoryError(msg)) => assert!(msg.contains("insert failed")),
            other => panic!("Expected RepositoryError, got {:?}", other),
        }
    }
}
