use actix_web::{post, web, Responder};
use serde::Deserialize;
use tracing::{error, info, warn};
use utoipa::ToSchema;

use super::user_view::UserView;
use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::shared::api::ApiResponse;
use crate::user::application::ports::incoming::use_cases::{UpdateUserCommand, UpdateUserError};
use crate::AppState;

/// Any combination of the change fields may be sent. The changes are
/// applied in order: history, bookmark addition, bookmark removal.
#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateUserRequest {
    pub token: Option<String>,

    /// Video id to record in the watch history
    #[schema(example = "65f1c0a2b3d4e5f6012345aa")]
    pub video_history: Option<String>,

    /// Video id to bookmark
    pub add_bookmark: Option<String>,

    /// Video id to remove from the bookmarks
    pub delete_bookmark: Option<String>,
}

/// Update watch history and bookmarks
#[utoipa::path(
    post,
    path = "/user/update",
    tag = "users",
    request_body = UpdateUserRequest,
    responses(
        (status = 200, description = "Updated user", body = inline(SuccessResponse<UserView>)),
        (status = 400, description = "Missing token or unknown user", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[post("/user/update")]
pub async fn update_user_handler(
    payload: web::Json<UpdateUserRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let dto = payload.into_inner();

    let command = match UpdateUserCommand::new(
        dto.token,
        dto.video_history,
        dto.add_bookmark,
        dto.delete_bookmark,
    ) {
        Ok(command) => command,
        Err(missing) => return ApiResponse::bad_request("MISSING_FIELD", &missing.to_string()),
    };

    match data.user.update.execute(command).await {
        Ok(user) => {
            info!(user_id = %user.id, "User activity updated");
            ApiResponse::success(UserView::from(user))
        }
        Err(UpdateUserError::UserNotFound) => {
            warn!("Update rejected: unknown token");
            ApiResponse::bad_request("USER_NOT_FOUND", "User not found")
        }
        Err(UpdateUserError::RepositoryError(ref e)) => {
            error!(error = %e, "Failed to update user");
            ApiResponse::internal_error()
        }
    }
}
