use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::video::application::domain::entities::VideoId;

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(String);

impl UserId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<String> for UserId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Opaque bearer credential. Issued once at registration and returned
/// unchanged at every login.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AccessToken(String);

impl AccessToken {
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

// Never print the credential itself in logs.
impl fmt::Debug for AccessToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("AccessToken(***)")
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VideoHistory {
    pub video_id: VideoId,
    pub date: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct User {
    pub id: UserId,
    pub email: String,
    pub username: String,
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
    pub token: AccessToken,
    pub history: Vec<VideoHistory>,
    pub bookmarks: Vec<VideoId>,
}

impl User {
    /// Keeps at most one entry per video; the surviving entry is the latest watch.
    pub fn record_watch(&mut self, video_id: VideoId, at: DateTime<Utc>) {
        self.history.retain(|entry| entry.video_id != video_id);
        self.history.push(VideoHistory { video_id, date: at });
    }

    pub fn add_bookmark(&mut self, video_id: VideoId) {
        if !self.bookmarks.contains(&video_id) {
            self.bookmarks.push(video_id);
        }
    }

    pub fn remove_bookmark(&mut self, video_id: &VideoId) {
        self.bookmarks.retain(|id| id != video_id);
    }

    /// Applies history first, then the bookmark addition, then the removal.
    pub fn apply_activity(&mut self, activity: &UserActivity) {
        if let Some(watched) = &activity.watched {
            self.record_watch(watched.video_id.clone(), watched.date);
        }
        if let Some(id) = &activity.add_bookmark {
            self.add_bookmark(id.clone());
        }
        if let Some(id) = &activity.remove_bookmark {
            self.remove_bookmark(id);
        }
    }
}

/// A batch of watch-history and bookmark changes applied to one user in a
/// single store operation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserActivity {
    pub watched: Option<VideoHistory>,
    pub add_bookmark: Option<VideoId>,
    pub remove_bookmark: Option<VideoId>,
}

impl UserActivity {
    pub fn is_empty(&self) -> bool {
        self.watched.is_none() && self.add_bookmark.is_none() && self.remove_bookmark.is_none()
    }
}
