use actix_web::{post, web, HttpResponse, Responder};
use serde::Deserialize;
use tracing::{error, info, warn};
use utoipa::ToSchema;

use super::user_view::UserView;
use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::shared::api::ApiResponse;
use crate::user::application::ports::incoming::use_cases::{
    RegisterUserCommand, RegisterUserCommandError, RegisterUserError,
};
use crate::AppState;

/// Request body for user registration
#[derive(Debug, Deserialize, ToSchema)]
pub struct RegisterUserRequest {
    #[schema(example = "jane@example.com")]
    pub email: Option<String>,

    #[schema(example = "jane")]
    pub username: Option<String>,

    #[schema(example = "SecurePass123!")]
    pub password: Option<String>,
}

/// Register a new user
///
/// Creates an account with an empty watch history and bookmark list and
/// returns it together with the account's access token.
#[utoipa::path(
    post,
    path = "/register",
    tag = "users",
    request_body = RegisterUserRequest,
    responses(
        (status = 200, description = "User created", body = inline(SuccessResponse<UserView>)),
        (
            status = 400,
            description = "Missing field, invalid email or email already registered",
            body = ErrorResponse,
            example = json!({
                "success": false,
                "error": {
                    "code": "EMAIL_ALREADY_EXISTS",
                    "message": "Email already registered"
                }
            })
        ),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[post("/register")]
pub async fn register_user_handler(
    payload: web::Json<RegisterUserRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let dto = payload.into_inner();

    let command = match RegisterUserCommand::new(dto.email, dto.username, dto.password) {
        Ok(command) => command,
        Err(err) => return map_command_error(err),
    };

    info!(email = %command.email(), "Registration attempt");

    match data.user.register.execute(command).await {
        Ok(user) => {
            info!(user_id = %user.id, "User registered");
            ApiResponse::success(UserView::from(user))
        }
        Err(err) => map_register_error(err),
    }
}

fn map_command_error(err: RegisterUserCommandError) -> HttpResponse {
    match err {
        RegisterUserCommandError::MissingField(missing) => {
            ApiResponse::bad_request("MISSING_FIELD", &missing.to_string())
        }
        RegisterUserCommandError::InvalidEmail => {
            ApiResponse::bad_request("INVALID_EMAIL", "Invalid email format")
        }
    }
}

fn map_register_error(err: RegisterUserError) -> HttpResponse {
    match err {
        RegisterUserError::EmailAlreadyExists => {
            warn!("Registration rejected: email already registered");
            ApiResponse::bad_request("EMAIL_ALREADY_EXISTS", "Email already registered")
        }
        RegisterUserError::HashingFailed(ref e) => {
            error!(error = %e, "Password hashing failed");
            ApiResponse::internal_error()
        }
        RegisterUserError::RepositoryError(ref e) => {
            error!(error = %e, "Failed to persist user");
            ApiResponse::internal_error()
        }
    }
}
