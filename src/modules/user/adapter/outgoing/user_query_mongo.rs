use async_trait::async_trait;
use mongodb::{Collection, Database};

use super::user_document::{by_email, by_token, UserDocument};
use crate::shared::mongo::{case_insensitive, document_exists, USERS_COLLECTION};
use crate::user::application::{
    domain::entities::{AccessToken, User},
    ports::outgoing::{UserQuery, UserQueryError},
};

#[derive(Clone, Debug)]
pub struct UserQueryMongo {
    users: Collection<UserDocument>,
}

impl UserQueryMongo {
    pub fn new(db: &Database) -> Self {
        Self {
            users: db.collection(USERS_COLLECTION),
        }
    }
}

// Emails are matched case-insensitively: new accounts store them lowercased,
// older ones kept the casing they registered with.
#[async_trait]
impl UserQuery for UserQueryMongo {
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, UserQueryError> {
        let found = self
            .users
            .find_one(by_email(email))
            .collation(case_insensitive())
            .await
            .map_err(|e| UserQueryError::DatabaseError(e.to_string()))?;

        Ok(found.map(UserDocument::into_user))
    }

    async fn find_by_token(&self, token: &AccessToken) -> Result<Option<User>, UserQueryError> {
        let found = self
            .users
            .find_one(by_token(token))
            .await
            .map_err(|e| UserQueryError::DatabaseError(e.to_string()))?;

        Ok(found.map(UserDocument::into_user))
    }

    async fn email_exists(&self, email: &str) -> Result<bool, UserQueryError> {
        document_exists(&self.users, by_email(email), Some(case_insensitive()))
            .await
            .map_err(|e| UserQueryError::DatabaseError(e.to_string()))
    }
}
