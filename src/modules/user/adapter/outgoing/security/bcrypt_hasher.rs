use async_trait::async_trait;
use bcrypt::{hash, verify, DEFAULT_COST};

use crate::user::application::ports::outgoing::password_hasher::{HashError, PasswordHasher};

/// Verifies hashes written by older deployments. New passwords go through
/// Argon2 instead.
#[derive(Debug, Clone)]
pub struct BcryptHasher {
    cost: u32,
}

impl BcryptHasher {
    pub fn new() -> Self {
        Self { cost: DEFAULT_COST }
    }

    #[cfg(test)]
    pub fn with_cost(cost: u32) -> Self {
        Self { cost }
    }

    pub fn recognizes(hash: &str) -> bool {
        hash.starts_with("$2")
    }
}

impl Default for BcryptHasher {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl PasswordHasher for BcryptHasher {
    async fn hash_password(&self, password: &str) -> Result<String, HashError> {
        let password = password.to_string();
        let cost = self.cost;

        tokio::task::spawn_blocking(move || hash(password, cost).map_err(|_| HashError::HashFailed))
            .await
            .map_err(|_| HashError::TaskFailed)?
    }

    async fn verify_password(&self, password: &str, hashed: &str) -> Result<bool, HashError> {
        let password = password.to_string();
        let hashed = hashed.to_string();

        tokio::task::spawn_blocking(move || {
            verify(password, &hashed).map_err(|_| HashError::VerifyFailed)
        })
        .await
        .map_err(|_| HashError::TaskFailed)?
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn bcrypt_hash_and_verify_password() {
        let hasher = BcryptHasher::with_cost(4);
        let password = "SecurePassword123";

        let hashed = hasher.hash_password(password).await.unwrap();
        assert!(BcryptHasher::recognizes(&hashed));

        assert!(hasher.verify_password(password, &hashed).await.unwrap());
        assert!(!hasher.verify_password("WrongPassword", &hashed).await.unwrap());

        let invalid = hasher.verify_password(password, "invalid-hash").await;
        assert!(matches!(invalid, Err(HashError::VerifyFailed)));
    }
}
