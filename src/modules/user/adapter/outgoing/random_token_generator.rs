use rand::{distributions::Alphanumeric, Rng};

use crate::user::application::{
    domain::entities::AccessToken, ports::outgoing::TokenGenerator,
};

const TOKEN_LENGTH: usize = 48;

/// Opaque bearer tokens drawn from the thread-local CSPRNG (OS seeded).
#[derive(Debug, Clone, Default)]
pub struct RandomTokenGenerator;

impl RandomTokenGenerator {
    pub fn new() -> Self {
        Self
    }
}

impl TokenGenerator for RandomTokenGenerator {
    fn generate(&self) -> AccessToken {
        let token: String = rand::thread_rng()
            .sample_iter(&Alphanumeric)
            .take(TOKEN_LENGTH)
            .map(char::from)
            .collect();
        AccessToken::new(token)
    }
}
