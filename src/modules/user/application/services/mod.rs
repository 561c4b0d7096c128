mod get_my_info_service;
mod login_user_service;
mod register_user_service;
mod update_user_service;

pub use get_my_info_service::GetMyInfoService;
pub use login_user_service::LoginUserService;
pub use register_user_service::RegisterUserService;
pub use update_user_service::UpdateUserService;
