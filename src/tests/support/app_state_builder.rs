use actix_web::web;
use std::sync::Arc;

use crate::tests::support::stubs::*;
use crate::user::application::{
    ports::incoming::use_cases::{
        GetMyInfoUseCase, LoginUserUseCase, RegisterUserUseCase, UpdateUserUseCase,
    },
    user_use_cases::UserUseCases,
};
use crate::video::application::{
    ports::incoming::use_cases::{
        AddCommentUseCase, CreateVideoUseCase, DeleteVideoUseCase, GetVideoUseCase,
        ListVideosUseCase,
    },
    video_use_cases::VideoUseCases,
};
use crate::AppState;

/// Every use case starts as a stub; tests swap in the one they exercise.
pub struct TestAppStateBuilder {
    user: UserUseCases,
    video: VideoUseCases,
}

impl Default for TestAppStateBuilder {
    fn default() -> Self {
        Self {
            user: UserUseCases {
                register: Arc::new(StubRegisterUserUseCase),
                login: Arc::new(StubLoginUserUseCase),
                get_my_info: Arc::new(StubGetMyInfoUseCase),
                update: Arc::new(StubUpdateUserUseCase),
            },
            video: VideoUseCases {
                create: Arc::new(StubCreateVideoUseCase),
                list: Arc::new(StubListVideosUseCase),
                get_single: Arc::new(StubGetVideoUseCase),
                delete: Arc::new(StubDeleteVideoUseCase),
                add_comment: Arc::new(StubAddCommentUseCase),
            },
        }
    }
}

impl TestAppStateBuilder {
    pub fn with_user_use_cases(mut self, user: UserUseCases) -> Self {
        self.user = user;
        self
    }

    pub fn with_video_use_cases(mut self, video: VideoUseCases) -> Self {
        self.video = video;
        self
    }

    pub fn with_register_user(
        mut self,
        uc: impl RegisterUserUseCase + Send + Sync + 'static,
    ) -> Self {
        self.user.register = Arc::new(uc);
        self
    }

    pub fn with_login_user(mut self, uc: impl LoginUserUseCase + Send + Sync + 'static) -> Self {
        self.user.login = Arc::new(uc);
        self
    }

    pub fn with_get_my_info(mut self, uc: impl GetMyInfoUseCase + Send + Sync + 'static) -> Self {
        self.user.get_my_info = Arc::new(uc);
        self
    }

    pub fn with_update_user(mut self, uc: impl UpdateUserUseCase + Send + Sync + 'static) -> Self {
        self.user.update = Arc::new(uc);
        self
    }

    pub fn with_create_video(
        mut self,
        uc: impl CreateVideoUseCase + Send + Sync + 'static,
    ) -> Self {
        self.video.create = Arc::new(uc);
        self
    }

    pub fn with_list_videos(mut self, uc: impl ListVideosUseCase + Send + Sync + 'static) -> Self {
        self.video.list = Arc::new(uc);
        self
    }

    pub fn with_get_video(mut self, uc: impl GetVideoUseCase + Send + Sync + 'static) -> Self {
        self.video.get_single = Arc::new(uc);
        self
    }

    pub fn with_delete_video(
        mut self,
        uc: impl DeleteVideoUseCase + Send + Sync + 'static,
    ) -> Self {
        self.video.delete = Arc::new(uc);
        self
    }

    pub fn with_add_comment(mut self, uc: impl AddCommentUseCase + Send + Sync + 'static) -> Self {
        self.video.add_comment = Arc::new(uc);
        self
    }

    pub fn build(self) -> web::Data<AppState> {
        web::Data::new(AppState {
            user: self.user,
            video: self.video,
        })
    }
}
