use actix_web::{get, web, HttpResponse, Responder};
use tracing::error;

use super::video_view::VideoView;
use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::shared::{api::ApiResponse, validation::optional};
use crate::user::application::domain::entities::UserId;
use crate::video::application::{
    domain::entities::Video,
    ports::{incoming::use_cases::ListVideosError, outgoing::VideoListFilter},
};
use crate::AppState;

/// List all live videos, newest first
#[utoipa::path(
    get,
    path = "/video/all",
    tag = "videos",
    responses(
        (status = 200, description = "Videos", body = inline(SuccessResponse<Vec<VideoView>>)),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[get("/video/all")]
pub async fn get_all_videos_handler(data: web::Data<AppState>) -> impl Responder {
    render(data.video.list.execute(VideoListFilter::All).await)
}

/// List the live videos of one author, newest first
#[utoipa::path(
    get,
    path = "/video/user/{id}",
    tag = "videos",
    params(("id" = String, Path, description = "Author id")),
    responses(
        (status = 200, description = "Videos", body = inline(SuccessResponse<Vec<VideoView>>)),
        (status = 400, description = "Blank author id", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[get("/video/user/{id}")]
pub async fn get_user_videos_handler(
    path: web::Path<String>,
    data: web::Data<AppState>,
) -> impl Responder {
    let Some(author) = optional(Some(path.into_inner())) else {
        return ApiResponse::bad_request("MISSING_FIELD", "Missing required field: id");
    };

    render(
        data.video
            .list
            .execute(VideoListFilter::Author(UserId::new(author)))
            .await,
    )
}

fn render(result: Result<Vec<Video>, ListVideosError>) -> HttpResponse {
    match result {
        Ok(videos) => {
            let views: Vec<VideoView> = videos.into_iter().map(VideoView::from).collect();
            ApiResponse::success(views)
        }
        Err(ListVideosError::QueryFailed(ref e)) => {
            error!(error = %e, "Failed to list videos");
            ApiResponse::internal_error()
        }
    }
}
