mod get_my_info;
mod login_user;
mod register_user;
mod update_user;

pub use get_my_info::{GetMyInfoError, GetMyInfoUseCase};
pub use login_user::{LoginCommand, LoginError, LoginUserUseCase};
pub use register_user::{
    RegisterUserCommand, RegisterUserCommandError, RegisterUserError, RegisterUserUseCase,
};
pub use update_user::{UpdateUserCommand, UpdateUserError, UpdateUserUseCase};
