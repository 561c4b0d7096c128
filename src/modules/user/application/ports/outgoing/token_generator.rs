use crate::user::application::domain::entities::AccessToken;

/// Issues the long-lived bearer token a user receives at registration.
pub trait TokenGenerator: Send + Sync {
    fn generate(&self) -> AccessToken;
}
