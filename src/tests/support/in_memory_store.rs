use async_trait::async_trait;
use chrono::{DateTime, Utc};
use mongodb::bson::oid::ObjectId;
use std::sync::{Arc, Mutex};

use crate::shared::mongo::parse_object_id;
use crate::user::application::{
    domain::entities::{AccessToken, User, UserActivity, UserId},
    ports::outgoing::{
        CreateUserData, UserQuery, UserQueryError, UserRepository, UserRepositoryError,
    },
};
use crate::video::application::{
    domain::entities::{Video, VideoId},
    ports::outgoing::{
        CreateVideoData, VideoListFilter, VideoQuery, VideoQueryError, VideoRepository,
        VideoRepositoryError,
    },
};

#[derive(Default)]
struct Collections {
    users: Vec<User>,
    videos: Vec<Video>,
}

/// Store double that follows the MongoDB adapters' semantics: unique
/// emails, ObjectId ids (malformed ids match nothing), single-step
/// conditional updates and the `deleted: null` gate on every video read.
#[derive(Clone, Default)]
pub struct InMemoryStore {
    inner: Arc<Mutex<Collections>>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn user_count(&self) -> usize {
        self.inner.lock().unwrap().users.len()
    }

    pub fn video(&self, id: &VideoId) -> Option<Video> {
        self.inner
            .lock()
            .unwrap()
            .videos
            .iter()
            .find(|v| &v.id == id)
            .cloned()
    }

    fn live_video_mut<'a>(
        videos: &'a mut [Video],
        id: &VideoId,
    ) -> Option<&'a mut Video> {
        parse_object_id(id.as_str())?;
        videos.iter_mut().find(|v| &v.id == id && !v.is_deleted())
    }
}

#[async_trait]
impl UserQuery for InMemoryStore {
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, UserQueryError> {
        let state = self.inner.lock().unwrap();
        Ok(state
            .users
            .iter()
            .find(|u| u.email.eq_ignore_ascii_case(email))
            .cloned())
    }

    async fn find_by_token(&self, token: &AccessToken) -> Result<Option<User>, UserQueryError> {
        let state = self.inner.lock().unwrap();
        Ok(state.users.iter().find(|u| &u.token == token).cloned())
    }

    async fn email_exists(&self, email: &str) -> Result<bool, UserQueryError> {
        let state = self.inner.lock().unwrap();
        Ok(state.users.iter().any(|u| u.email.eq_ignore_ascii_case(email)))
    }
}

#[async_trait]
impl UserRepository for InMemoryStore {
    async fn create_user(&self, data: CreateUserData) -> Result<User, UserRepositoryError> {
        let mut state = self.inner.lock().unwrap();
        if state
            .users
            .iter()
            .any(|u| u.email == data.email || u.token == data.token)
        {
            return Err(UserRepositoryError::UserAlreadyExists);
        }

        let user = User {
            id: UserId::new(ObjectId::new().to_hex()),
            email: data.email,
            username: data.username,
            password_hash: data.password_hash,
            created_at: data.created_at,
            token: data.token,
            history: Vec::new(),
            bookmarks: Vec::new(),
        };
        state.users.push(user.clone());
        Ok(user)
    }

    async fn record_activity(
        &self,
        token: &AccessToken,
        activity: UserActivity,
    ) -> Result<User, UserRepositoryError> {
        let mut state = self.inner.lock().unwrap();
        let user = state
            .users
            .iter_mut()
            .find(|u| &u.token == token)
            .ok_or(UserRepositoryError::UserNotFound)?;

        user.apply_activity(&activity);
        Ok(user.clone())
    }
}

#[async_trait]
impl VideoQuery for InMemoryStore {
    async fn list(&self, filter: VideoListFilter) -> Result<Vec<Video>, VideoQueryError> {
        let state = self.inner.lock().unwrap();
        let mut videos: Vec<Video> = state
            .videos
            .iter()
            .filter(|v| !v.is_deleted())
            .filter(|v| match &filter {
                VideoListFilter::All => true,
                VideoListFilter::Author(author) => &v.author_id == author,
            })
            .cloned()
            .collect();
        videos.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(videos)
    }

    async fn find_by_id(&self, video_id: &VideoId) -> Result<Option<Video>, VideoQueryError> {
        let mut state = self.inner.lock().unwrap();
        Ok(Self::live_video_mut(&mut state.videos, video_id).map(|v| v.clone()))
    }
}

#[async_trait]
impl VideoRepository for InMemoryStore {
    async fn create_video(&self, data: CreateVideoData) -> Result<Video, VideoRepositoryError> {
        let video = Video {
            id: VideoId::new(ObjectId::new().to_hex()),
            title: data.title,
            content: data.content,
            url: data.url,
            author_id: data.author_id,
            created_at: data.created_at,
            deleted_at: None,
            comments: Vec::new(),
        };
        self.inner.lock().unwrap().videos.push(video.clone());
        Ok(video)
    }

    async fn soft_delete_owned(
        &self,
        video_id: &VideoId,
        author_id: &UserId,
        at: DateTime<Utc>,
    ) -> Result<Video, VideoRepositoryError> {
        let mut state = self.inner.lock().unwrap();
        let video = Self::live_video_mut(&mut state.videos, video_id)
            .filter(|v| &v.author_id == author_id)
            .ok_or(VideoRepositoryError::VideoNotFound)?;

        video.deleted_at = Some(at);
        Ok(video.clone())
    }

    async fn push_comment(
        &self,
        video_id: &VideoId,
        comment: String,
    ) -> Result<Video, VideoRepositoryError> {
        let mut state = self.inner.lock().unwrap();
        let video = Self::live_video_mut(&mut state.videos, video_id)
            .ok_or(VideoRepositoryError::VideoNotFound)?;

        video.comments.push(comment);
        Ok(video.clone())
    }
}
