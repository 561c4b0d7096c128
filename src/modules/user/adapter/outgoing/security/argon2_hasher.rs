use argon2::{
    password_hash::{
        Error as PasswordHashError, PasswordHash, PasswordHasher as _, PasswordVerifier, SaltString,
    },
    Algorithm, Argon2, Params, Version,
};
use async_trait::async_trait;
use rand_core::OsRng;

use crate::user::application::ports::outgoing::password_hasher::{
    HashError, PasswordHasher as HasherTrait,
};

#[derive(Clone)]
pub struct Argon2Hasher {
    params: Params,
    #[cfg(test)]
    salt_override: Option<SaltString>,
}

impl Argon2Hasher {
    /// Fails when the cost parameters are out of range for Argon2.
    pub fn with_params(
        memory_kib: u32,
        iterations: u32,
        parallelism: u32,
    ) -> Result<Self, argon2::Error> {
        let params = Params::new(memory_kib, iterations, parallelism, None)?;

        Ok(Self {
            params,
            #[cfg(test)]
            salt_override: None,
        })
    }

    #[cfg(test)]
    pub fn for_tests() -> Self {
        Self {
            params: Params::new(1024, 1, 1, None).unwrap(),
            salt_override: None,
        }
    }

    #[cfg(test)]
    pub fn with_fixed_salt(salt: &str) -> Self {
        Self {
            params: Params::new(1024, 1, 1, None).unwrap(),
            salt_override: Some(SaltString::from_b64(salt).unwrap()),
        }
    }
}

impl Default for Argon2Hasher {
    fn default() -> Self {
        Self {
            params: Params::default(),
            #[cfg(test)]
            salt_override: None,
        }
    }
}

#[async_trait]
impl HasherTrait for Argon2Hasher {
    async fn hash_password(&self, password: &str) -> Result<String, HashError> {
        let password = password.to_string();
        let params = self.params.clone();

        #[cfg(test)]
        let salt_override = self.salt_override.clone();

        tokio::task::spawn_blocking(move || {
            let argon2 = Argon2::new(Algorithm::Argon2id, Version::V0x13, params);

            #[cfg(test)]
            let salt = salt_override.unwrap_or_else(|| SaltString::generate(&mut OsRng));

            #[cfg(not(test))]
            let salt = SaltString::generate(&mut OsRng);

            argon2
                .hash_password(password.as_bytes(), &salt)
                .map(|hash| hash.to_string())
                .map_err(|_| HashError::HashFailed)
        })
        .await
        .map_err(|_| HashError::TaskFailed)?
    }

    async fn verify_password(&self, password: &str, hash: &str) -> Result<bool, HashError> {
        let password = password.to_string();
        let hash = hash.to_string();

        // Cost parameters are read back from the PHC string.
        tokio::task::spawn_blocking(move || {
            let parsed_hash = PasswordHash::new(&hash).map_err(|_| HashError::VerifyFailed)?;

            match Argon2::default().verify_password(password.as_bytes(), &parsed_hash) {
                Ok(_) => Ok(true),
                Err(PasswordHashError::Password) => Ok(false),
                Err(_) => Err(HashError::VerifyFailed),
            }
        })
        .await
        .map_err(|_| HashError::TaskFailed)?
    }
}
