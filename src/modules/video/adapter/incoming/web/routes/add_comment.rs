use actix_web::{post, web, Responder};
use serde::{Deserialize, Serialize};
use tracing::{error, info};
use utoipa::ToSchema;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::shared::api::ApiResponse;
use crate::video::application::ports::incoming::use_cases::{AddCommentCommand, AddCommentError};
use crate::AppState;

#[derive(Debug, Deserialize, ToSchema)]
pub struct AddCommentRequest {
    #[schema(example = "65f1c0a2b3d4e5f6012345aa")]
    pub video_id: Option<String>,

    /// Comment text
    #[schema(example = "Great explanation!")]
    pub content: Option<String>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct CommentAdded {
    pub video_id: String,
    #[schema(example = 3)]
    pub comment_count: usize,
}

/// Comment on a video
#[utoipa::path(
    post,
    path = "/video/comment",
    tag = "videos",
    request_body = AddCommentRequest,
    responses(
        (status = 200, description = "Comment stored", body = inline(SuccessResponse<CommentAdded>)),
        (status = 400, description = "Missing field or video not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[post("/video/comment")]
pub async fn add_comment_handler(
    payload: web::Json<AddCommentRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let dto = payload.into_inner();

    let command = match AddCommentCommand::new(dto.video_id, dto.content) {
        Ok(command) => command,
        Err(missing) => return ApiResponse::bad_request("MISSING_FIELD", &missing.to_string()),
    };

    match data.video.add_comment.execute(command).await {
        Ok(video) => {
            info!(video_id = %video.id, comments = video.comment_count(), "Comment added");
            ApiResponse::success(CommentAdded {
                video_id: video.id.to_string(),
                comment_count: video.comment_count(),
            })
        }
        Err(AddCommentError::VideoNotFound) => {
            ApiResponse::bad_request("VIDEO_NOT_FOUND", "Video not found")
        }
        Err(AddCommentError::RepositoryError(ref e)) => {
            error!(error = %e, "Failed to add comment");
            ApiResponse::internal_error()
        }
    }
}
