use std::sync::Arc;

use crate::video::application::{
    ports::{
        incoming::use_cases::{
            AddCommentUseCase, CreateVideoUseCase, DeleteVideoUseCase, GetVideoUseCase,
            ListVideosUseCase,
        },
        outgoing::{VideoQuery, VideoRepository},
    },
    services::{
        AddCommentService, CreateVideoService, DeleteVideoService, GetVideoService,
        ListVideosService,
    },
};

#[derive(Clone)]
pub struct VideoUseCases {
    pub create: Arc<dyn CreateVideoUseCase + Send + Sync>,
    pub list: Arc<dyn ListVideosUseCase + Send + Sync>,
    pub get_single: Arc<dyn GetVideoUseCase + Send + Sync>,
    pub delete: Arc<dyn DeleteVideoUseCase + Send + Sync>,
    pub add_comment: Arc<dyn AddCommentUseCase + Send + Sync>,
}

impl VideoUseCases {
    pub fn wire<Q, R>(query: Q, repository: R) -> Self
    where
        Q: VideoQuery + Clone + 'static,
        R: VideoRepository + Clone + 'static,
    {
        Self {
            create: Arc::new(CreateVideoService::new(repository.clone())),
            list: Arc::new(ListVideosService::new(query.clone())),
            get_single: Arc::new(GetVideoService::new(query)),
            delete: Arc::new(DeleteVideoService::new(repository.clone())),
            add_comment: Arc::new(AddCommentService::new(repository)),
        }
    }
}
