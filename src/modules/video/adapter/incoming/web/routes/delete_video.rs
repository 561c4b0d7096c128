use actix_web::{post, web, Responder};
use serde::Deserialize;
use tracing::{error, info, warn};
use utoipa::ToSchema;

use super::video_view::VideoView;
use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::shared::api::ApiResponse;
use crate::video::application::ports::incoming::use_cases::{
    DeleteVideoCommand, DeleteVideoError,
};
use crate::AppState;

#[derive(Debug, Deserialize, ToSchema)]
pub struct DeleteVideoRequest {
    #[schema(example = "65f1c0a2b3d4e5f6012345aa")]
    pub video_id: Option<String>,

    /// Id of the requesting user; must be the video's author
    #[schema(example = "65f1c0a2b3d4e5f601234567")]
    pub my_id: Option<String>,
}

/// Soft delete a video
///
/// Only the author can delete a video. A video that is unknown, owned by
/// someone else or already deleted is reported as not found.
#[utoipa::path(
    post,
    path = "/video/delete",
    tag = "videos",
    request_body = DeleteVideoRequest,
    responses(
        (status = 200, description = "Deleted video", body = inline(SuccessResponse<VideoView>)),
        (status = 400, description = "Missing field or video not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[post("/video/delete")]
pub async fn delete_video_handler(
    payload: web::Json<DeleteVideoRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let dto = payload.into_inner();

    let command = match DeleteVideoCommand::new(dto.video_id, dto.my_id) {
        Ok(command) => command,
        Err(missing) => return ApiResponse::bad_request("MISSING_FIELD", &missing.to_string()),
    };

    match data.video.delete.execute(command).await {
        Ok(video) => {
            info!(video_id = %video.id, "Video deleted");
            ApiResponse::success(VideoView::from(video))
        }
        Err(DeleteVideoError::VideoNotFound) => {
            warn!("Delete rejected: video missing, deleted or not owned");
            ApiResponse::bad_request("VIDEO_NOT_FOUND", "Video not found")
        }
        Err(DeleteVideoError::RepositoryError(ref e)) => {
            error!(error = %e, "Failed to delete video");
            ApiResponse::internal_error()
        }
    }
}
