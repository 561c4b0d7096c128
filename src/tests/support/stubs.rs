use async_trait::async_trait;

use crate::user::application::{
    domain::entities::{AccessToken, User},
    ports::incoming::use_cases::{
        GetMyInfoError, GetMyInfoUseCase, LoginCommand, LoginError, LoginUserUseCase,
        RegisterUserCommand, RegisterUserError, RegisterUserUseCase, UpdateUserCommand,
        UpdateUserError, UpdateUserUseCase,
    },
};
use crate::video::application::{
    domain::entities::{Video, VideoId},
    ports::{
        incoming::use_cases::{
            AddCommentCommand, AddCommentError, AddCommentUseCase, CreateVideoCommand,
            CreateVideoError, CreateVideoUseCase, DeleteVideoCommand, DeleteVideoError,
            DeleteVideoUseCase, GetVideoError, GetVideoUseCase, ListVideosError,
            ListVideosUseCase,
        },
        outgoing::VideoListFilter,
    },
};

#[derive(Default, Clone)]
pub struct StubRegisterUserUseCase;

#[async_trait]
impl RegisterUserUseCase for StubRegisterUserUseCase {
    async fn execute(&self, _command: RegisterUserCommand) -> Result<User, RegisterUserError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubLoginUserUseCase;

#[async_trait]
impl LoginUserUseCase for StubLoginUserUseCase {
    async fn execute(&self, _command: LoginCommand) -> Result<AccessToken, LoginError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubGetMyInfoUseCase;

#[async_trait]
impl GetMyInfoUseCase for StubGetMyInfoUseCase {
    async fn execute(&self, _token: AccessToken) -> Result<User, GetMyInfoError> {
        Err(GetMyInfoError::InvalidToken)
    }
}

#[derive(Default, Clone)]
pub struct StubUpdateUserUseCase;

#[async_trait]
impl UpdateUserUseCase for StubUpdateUserUseCase {
    async fn execute(&self, _command: UpdateUserCommand) -> Result<User, UpdateUserError> {
        Err(UpdateUserError::UserNotFound)
    }
}

#[derive(Default, Clone)]
pub struct StubCreateVideoUseCase;

#[async_trait]
impl CreateVideoUseCase for StubCreateVideoUseCase {
    async fn execute(&self, _command: CreateVideoCommand) -> Result<Video, CreateVideoError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubListVideosUseCase;

#[async_trait]
impl ListVideosUseCase for StubListVideosUseCase {
    async fn execute(&self, _filter: VideoListFilter) -> Result<Vec<Video>, ListVideosError> {
        Ok(vec![])
    }
}

#[derive(Default, Clone)]
pub struct StubGetVideoUseCase;

#[async_trait]
impl GetVideoUseCase for StubGetVideoUseCase {
    async fn execute(&self, _video_id: VideoId) -> Result<Video, GetVideoError> {
        Err(GetVideoError::NotFound)
    }
}

#[derive(Default, Clone)]
pub struct StubDeleteVideoUseCase;

#[async_trait]
impl DeleteVideoUseCase for StubDeleteVideoUseCase {
    async fn execute(&self, _command: DeleteVideoCommand) -> Result<Video, DeleteVideoError> {
        Err(DeleteVideoError::VideoNotFound)
    }
}

#[derive(Default, Clone)]
pub struct StubAddCommentUseCase;

#[async_trait]
impl AddCommentUseCase for StubAddCommentUseCase {
    async fn execute(&self, _command: AddCommentCommand) -> Result<Video, AddCommentError> {
        Err(AddCommentError::VideoNotFound)
    }
}
