use async_trait::async_trait;
use mongodb::{options::ReturnDocument, Collection, Database};
use tracing::{debug, warn};

use super::user_document::{activity_pipeline, by_token, UserDocument};
use crate::shared::mongo::{is_duplicate_key, USERS_COLLECTION};
use crate::user::application::{
    domain::entities::{AccessToken, User, UserActivity},
    ports::outgoing::{CreateUserData, UserRepository, UserRepositoryError},
};

#[derive(Clone, Debug)]
pub struct UserRepositoryMongo {
    users: Collection<UserDocument>,
}

impl UserRepositoryMongo {
    pub fn new(db: &Database) -> Self {
        Self {
            users: db.collection(USERS_COLLECTION),
        }
    }
}

#[async_trait]
impl UserRepository for UserRepositoryMongo {
    async fn create_user(&self, data: CreateUserData) -> Result<User, UserRepositoryError> {
        let document = UserDocument::from_new(data);

        match self.users.insert_one(&document).await {
            Ok(_) => Ok(document.into_user()),
            Err(e) if is_duplicate_key(&e) => {
                warn!(email = %document.email, "Duplicate key on user insert");
                Err(UserRepositoryError::UserAlreadyExists)
            }
            Err(e) => Err(UserRepositoryError::DatabaseError(e.to_string())),
        }
    }

    async fn record_activity(
        &self,
        token: &AccessToken,
        activity: UserActivity,
    ) -> Result<User, UserRepositoryError> {
        if activity.is_empty() {
            return self
                .users
                .find_one(by_token(token))
                .await
                .map_err(|e| UserRepositoryError::DatabaseError(e.to_string()))?
                .map(UserDocument::into_user)
                .ok_or(UserRepositoryError::UserNotFound);
        }

        let pipeline = activity_pipeline(&activity);
        debug!(stages = pipeline.len(), "Applying user activity update");

        self.users
            .find_one_and_update(by_token(token), pipeline)
            .return_document(ReturnDocument::After)
            .await
            .map_err(|e| UserRepositoryError::DatabaseError(e.to_string()))?
            .map(UserDocument::into_user)
            .ok_or(UserRepositoryError::UserNotFound)
    }
}
