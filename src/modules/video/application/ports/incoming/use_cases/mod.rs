mod add_comment;
mod create_video;
mod delete_video;
mod get_video;
mod list_videos;

pub use add_comment::{AddCommentCommand, AddCommentError, AddCommentUseCase};
pub use create_video::{CreateVideoCommand, CreateVideoError, CreateVideoUseCase};
pub use delete_video::{DeleteVideoCommand, DeleteVideoError, DeleteVideoUseCase};
pub use get_video::{GetVideoError, GetVideoUseCase};
pub use list_videos::{ListVideosError, ListVideosUseCase};
