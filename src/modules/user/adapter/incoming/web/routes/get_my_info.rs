use actix_web::{post, web, Responder};
use serde::Deserialize;
use tracing::{error, warn};
use utoipa::ToSchema;

use super::user_view::UserView;
use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::shared::{api::ApiResponse, validation::optional};
use crate::user::application::{
    domain::entities::AccessToken, ports::incoming::use_cases::GetMyInfoError,
};
use crate::AppState;

#[derive(Debug, Deserialize, ToSchema)]
pub struct MyInfoRequest {
    pub token: Option<String>,
}

/// Current user
///
/// Resolves the access token and returns the owning user, including watch
/// history and bookmarks. A missing or unreadable body counts as a missing
/// token.
#[utoipa::path(
    post,
    path = "/user/my_info",
    tag = "users",
    request_body = MyInfoRequest,
    responses(
        (status = 200, description = "User found", body = inline(SuccessResponse<UserView>)),
        (status = 403, description = "Missing or unknown token", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[post("/user/my_info")]
pub async fn get_my_info_handler(
    payload: Option<web::Json<MyInfoRequest>>,
    data: web::Data<AppState>,
) -> impl Responder {
    let token = payload.and_then(|p| p.into_inner().token);
    let Some(token) = optional(token) else {
        return ApiResponse::forbidden("MISSING_TOKEN", "Access token is required");
    };

    match data.user.get_my_info.execute(AccessToken::new(token)).await {
        Ok(user) => ApiResponse::success(UserView::from(user)),
        Err(GetMyInfoError::InvalidToken) => {
            warn!("my_info rejected: unknown token");
            ApiResponse::forbidden("INVALID_TOKEN", "Invalid access token")
        }
        Err(GetMyInfoError::QueryError(ref e)) => {
            error!(error = %e, "Failed to resolve token");
            ApiResponse::internal_error()
        }
    }
}
