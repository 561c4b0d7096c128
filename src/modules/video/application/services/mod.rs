mod add_comment_service;
mod create_video_service;
mod delete_video_service;
mod get_video_service;
mod list_videos_service;

pub use add_comment_service::AddCommentService;
pub use create_video_service::CreateVideoService;
pub use delete_video_service::DeleteVideoService;
pub use get_video_service::GetVideoService;
pub use list_videos_service::ListVideosService;

#[cfg(test)]
mod test_fixtures;
