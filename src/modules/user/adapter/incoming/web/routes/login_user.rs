use actix_web::{post, web, Responder};
use serde::{Deserialize, Serialize};
use tracing::{error, info, warn};
use utoipa::ToSchema;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::shared::api::ApiResponse;
use crate::user::application::ports::incoming::use_cases::{LoginCommand, LoginError};
use crate::AppState;

/// Login request from client
#[derive(Debug, Deserialize, ToSchema)]
pub struct LoginRequestDto {
    #[schema(example = "jane@example.com")]
    pub email: Option<String>,

    #[schema(example = "SecurePass123!")]
    pub password: Option<String>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct LoginResponse {
    /// The account's access token. It does not change between logins.
    #[schema(example = "q8ZrT0dYv3mWnK1pLs6cXbJ2hF9gA4eR7uIoP5tN0yQwEzVx")]
    pub token: String,
}

/// User login
///
/// Checks the password and returns the account's access token.
#[utoipa::path(
    post,
    path = "/login",
    tag = "users",
    request_body = LoginRequestDto,
    responses(
        (status = 200, description = "Login successful", body = inline(SuccessResponse<LoginResponse>)),
        (status = 400, description = "Missing field or unknown email", body = ErrorResponse),
        (
            status = 403,
            description = "Wrong password",
            body = ErrorResponse,
            example = json!({
                "success": false,
                "error": { "code": "INVALID_PASSWORD", "message": "Invalid password" }
            })
        ),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[post("/login")]
pub async fn login_user_handler(
    req: web::Json<LoginRequestDto>,
    data: web::Data<AppState>,
) -> impl Responder {
    let dto = req.into_inner();

    let command = match LoginCommand::new(dto.email, dto.password) {
        Ok(command) => command,
        Err(missing) => return ApiResponse::bad_request("MISSING_FIELD", &missing.to_string()),
    };

    info!(email = %command.email(), "Login attempt");

    match data.user.login.execute(command).await {
        Ok(token) => {
            info!("User logged in");
            ApiResponse::success(LoginResponse {
                token: token.as_str().to_string(),
            })
        }
        Err(LoginError::UserNotFound) => {
            warn!("Login failed: unknown email");
            ApiResponse::bad_request("USER_NOT_FOUND", "User not found")
        }
        Err(LoginError::InvalidPassword) => {
            warn!("Login failed: invalid password");
            ApiResponse::forbidden("INVALID_PASSWORD", "Invalid password")
        }
        Err(LoginError::PasswordVerificationFailed(ref e)) => {
            error!(error = %e, "Password verification failed");
            ApiResponse::internal_error()
        }
        Err(LoginError::QueryError(ref e)) => {
            error!(error = %e, "Database query failed");
            ApiResponse::internal_error()
        }
    }
}
