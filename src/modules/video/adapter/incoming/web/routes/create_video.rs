use actix_web::{post, web, Responder};
use serde::Deserialize;
use tracing::{error, info};
use utoipa::ToSchema;

use super::video_view::VideoView;
use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::shared::api::ApiResponse;
use crate::video::application::ports::incoming::use_cases::{
    CreateVideoCommand, CreateVideoError,
};
use crate::AppState;

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateVideoRequest {
    #[schema(example = "Intro to Rust")]
    pub title: Option<String>,

    #[schema(example = "Ownership and borrowing in ten minutes")]
    pub content: Option<String>,

    #[schema(example = "https://cdn.example.com/rust.mp4")]
    pub url: Option<String>,

    #[schema(example = "65f1c0a2b3d4e5f601234567")]
    pub author_id: Option<String>,
}

/// Publish a video
#[utoipa::path(
    post,
    path = "/video/create",
    tag = "videos",
    request_body = CreateVideoRequest,
    responses(
        (status = 200, description = "Video created", body = inline(SuccessResponse<VideoView>)),
        (status = 400, description = "Missing field", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[post("/video/create")]
pub async fn create_video_handler(
    payload: web::Json<CreateVideoRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let dto = payload.into_inner();

    let command = match CreateVideoCommand::new(dto.title, dto.content, dto.url, dto.author_id) {
        Ok(command) => command,
        Err(missing) => return ApiResponse::bad_request("MISSING_FIELD", &missing.to_string()),
    };

    match data.video.create.execute(command).await {
        Ok(video) => {
            info!(video_id = %video.id, author_id = %video.author_id, "Video created");
            ApiResponse::success(VideoView::from(video))
        }
        Err(CreateVideoError::RepositoryError(ref e)) => {
            error!(error = %e, "Failed to create video");
            ApiResponse::internal_error()
        }
    }
}
