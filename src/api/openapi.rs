use utoipa::OpenApi;

use crate::api::schemas::{ErrorDetail, ErrorResponse};
use crate::user::adapter::incoming::web::routes::{
    HistoryView, LoginRequestDto, LoginResponse, MyInfoRequest, RegisterUserRequest,
    UpdateUserRequest, UserView,
};
use crate::video::adapter::incoming::web::routes::{
    AddCommentRequest, CommentAdded, CreateVideoRequest, DeleteVideoRequest, VideoView,
};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "MOOC Video API",
        version = "1.0.0",
        description = "Users, videos, comments, watch history and bookmarks"
    ),
    paths(
        // Users
        crate::user::adapter::incoming::web::routes::register_user_handler,
        crate::user::adapter::incoming::web::routes::login_user_handler,
        crate::user::adapter::incoming::web::routes::get_my_info_handler,
        crate::user::adapter::incoming::web::routes::update_user_handler,

        // Videos
        crate::video::adapter::incoming::web::routes::create_video_handler,
        crate::video::adapter::incoming::web::routes::get_all_videos_handler,
        crate::video::adapter::incoming::web::routes::get_user_videos_handler,
        crate::video::adapter::incoming::web::routes::get_video_handler,
        crate::video::adapter::incoming::web::routes::delete_video_handler,
        crate::video::adapter::incoming::web::routes::add_comment_handler,
    ),
    components(
        schemas(
            ErrorResponse,
            ErrorDetail,

            RegisterUserRequest,
            LoginRequestDto,
            LoginResponse,
            MyInfoRequest,
            UpdateUserRequest,
            UserView,
            HistoryView,

            CreateVideoRequest,
            DeleteVideoRequest,
            AddCommentRequest,
            CommentAdded,
            VideoView
        )
    ),
    tags(
        (name = "users", description = "Registration, login, history and bookmarks"),
        (name = "videos", description = "Video publishing, listing and comments"),
    )
)]
pub struct ApiDoc;
