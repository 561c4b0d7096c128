mod add_comment;
mod create_video;
mod delete_video;
mod get_video;
mod get_videos;
mod video_view;

pub use add_comment::{__path_add_comment_handler, add_comment_handler, AddCommentRequest, CommentAdded};
pub use create_video::{__path_create_video_handler, create_video_handler, CreateVideoRequest};
pub use delete_video::{__path_delete_video_handler, delete_video_handler, DeleteVideoRequest};
pub use get_video::{__path_get_video_handler, get_video_handler};
pub use get_videos::{__path_get_all_videos_handler, get_all_videos_handler, __path_get_user_videos_handler, get_user_videos_handler};
pub use video_view::VideoView;
