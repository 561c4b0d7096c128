use async_trait::async_trait;

use super::{Argon2Hasher, BcryptHasher};
use crate::user::application::ports::outgoing::password_hasher::{HashError, PasswordHasher};

/// Hashes with Argon2id and dispatches verification on the stored hash
/// format, so accounts carrying a bcrypt hash can still log in.
#[derive(Clone)]
pub struct LegacyAwareHasher {
    argon2: Argon2Hasher,
    bcrypt: BcryptHasher,
}

impl LegacyAwareHasher {
    pub fn new(argon2: Argon2Hasher) -> Self {
        Self {
            argon2,
            bcrypt: BcryptHasher::new(),
        }
    }
}

#[async_trait]
impl PasswordHasher for LegacyAwareHasher {
    async fn hash_password(&self, password: &str) -> Result<String, HashError> {
        self.argon2.hash_password(password).await
    }

    async fn verify_password(&self, password: &str, hash: &str) -> Result<bool, HashError> {
        if BcryptHasher::recognizes(hash) {
            self.bcrypt.verify_password(password, hash).await
        } else {
            self.argon2.verify_password(password, hash).await
        }
    }
}
