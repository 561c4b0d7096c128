mod get_my_info;
mod login_user;
mod register_user;
mod update_user;
mod user_view;

pub use get_my_info::{__path_get_my_info_handler, get_my_info_handler, MyInfoRequest};
pub use login_user::{__path_login_user_handler, login_user_handler, LoginRequestDto, LoginResponse};
pub use register_user::{__path_register_user_handler, register_user_handler, RegisterUserRequest};
pub use update_user::{__path_update_user_handler, update_user_handler, UpdateUserRequest};
pub use user_view::{HistoryView, UserView};
