pub mod app_state_builder;
pub mod fixtures;
pub mod in_memory_store;
pub mod stubs;

use actix_web::web;
use std::sync::Arc;

use crate::user::{
    adapter::outgoing::{
        security::{Argon2Hasher, LegacyAwareHasher},
        RandomTokenGenerator,
    },
    application::user_use_cases::UserUseCases,
};
use crate::video::application::video_use_cases::VideoUseCases;
use crate::AppState;
use app_state_builder::TestAppStateBuilder;
use in_memory_store::InMemoryStore;

/// Real services over the in-memory store, with cheap Argon2 parameters.
pub fn in_memory_app_state(store: &InMemoryStore) -> web::Data<AppState> {
    TestAppStateBuilder::default()
        .with_user_use_cases(UserUseCases::wire(
            store.clone(),
            store.clone(),
            Arc::new(LegacyAwareHasher::new(Argon2Hasher::for_tests())),
            Arc::new(RandomTokenGenerator::new()),
        ))
        .with_video_use_cases(VideoUseCases::wire(store.clone(), store.clone()))
        .build()
}
