mod video_query;
mod video_repository;

pub use video_query::{VideoListFilter, VideoQuery, VideoQueryError};
pub use video_repository::{CreateVideoData, VideoRepository, VideoRepositoryError};
