use actix_web::{get, web, Responder};
use tracing::error;

use super::video_view::VideoView;
use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::shared::api::ApiResponse;
use crate::video::application::{
    domain::entities::VideoId, ports::incoming::use_cases::GetVideoError,
};
use crate::AppState;

/// Fetch one live video
#[utoipa::path(
    get,
    path = "/video/info/{video_id}",
    tag = "videos",
    params(("video_id" = String, Path, description = "Video id")),
    responses(
        (status = 200, description = "Video", body = inline(SuccessResponse<VideoView>)),
        (
            status = 400,
            description = "Unknown, malformed or deleted video id",
            body = ErrorResponse,
            example = json!({
                "success": false,
                "error": { "code": "VIDEO_NOT_FOUND", "message": "Video not found" }
            })
        ),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[get("/video/info/{video_id}")]
pub async fn get_video_handler(
    path: web::Path<String>,
    data: web::Data<AppState>,
) -> impl Responder {
    let video_id = VideoId::new(path.into_inner().trim());

    match data.video.get_single.execute(video_id).await {
        Ok(video) => ApiResponse::success(VideoView::from(video)),
        Err(GetVideoError::NotFound) => {
            ApiResponse::bad_request("VIDEO_NOT_FOUND", "Video not found")
        }
        Err(GetVideoError::RepositoryError(ref e)) => {
            error!(error = %e, "Failed to fetch video");
            ApiResponse::internal_error()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tests::support::{app_state_builder::TestAppStateBuilder, fixtures::sample_video};
    use crate::video::application::{
        domain::entities::Video, ports::incoming::use_cases::GetVideoUseCase,
    };
    use actix_web::{test, App};
    use async_trait::async_trait;

    #[derive(Clone)]
    struct MockGetVideo {
        result: Result<Video, GetVideoError>,
    }

    #[async_trait]
    impl GetVideoUseCase for MockGetVideo {
        async fn execute(&self, _video_id: VideoId) -> Result<Video, GetVideoError> {
            self.result.clone()
        }
    }

    async fn get_info(result: Result<Video, GetVideoError>) -> (u16, serde_json::Value) {
        let state = TestAppStateBuilder::default()
            .with_get_video(MockGetVideo { result })
            .build();
        let app = test::init_service(App::new().app_data(state).service(get_video_handler)).await;

        let req = test::TestRequest::get().uri("/video/info/v1").to_request();
        let resp = test::call_service(&app, req).await;
        let status = resp.status().as_u16();
        (status, test::read_body_json(resp).await)
    }

    #[actix_web::test]
    async fn get_video_success() {
        let (status, body) = get_info(Ok(sample_video("v1", "a"))).await;

        assert_eq!(status, 200);
        assert_eq!(body["data"]["id"], "v1");
        assert_eq!(body["data"]["title"], "Intro to Rust");
    }

    #[actix_web::test]
    async fn get_video_not_found_is_bad_request() {
        let (status, body) = get_info(Err(GetVideoError::NotFound)).await;

        assert_eq!(status, 400);
        assert_eq!(body["error"]["code"], "VIDEO_NOT_FOUND");
    }

    #[actix_web::test]
    async fn get_video_repository_error_is_internal_error() {
        let (status, _) = get_info(Err(GetVideoError::RepositoryError("x".to_string()))).await;

        assert_eq!(status, 500);
    }
}
