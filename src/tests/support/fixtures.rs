use chrono::Utc;

use crate::user::application::domain::entities::{AccessToken, User, UserId};
use crate::video::application::domain::entities::{Video, VideoId};

pub fn sample_user() -> User {
    User {
        id: UserId::new("65f1c0a2b3d4e5f601234567"),
        email: "jane@example.com".to_string(),
        username: "jane".to_string(),
        password_hash: "$argon2id$v=19$m=1024,t=1,p=1$c2FsdA$aGFzaA".to_string(),
        created_at: Utc::now(),
        token: AccessToken::new("q8ZrT0dYv3mWnK1pLs6cXbJ2hF9gA4eR7uIoP5tN0yQwEzVx"),
        history: vec![],
        bookmarks: vec![],
    }
}

pub fn sample_video(id: &str, author: &str) -> Video {
    Video {
        id: VideoId::new(id),
        title: "Intro to Rust".to_string(),
        content: "Ownership and borrowing".to_string(),
        url: "https://cdn.example.com/rust.mp4".to_string(),
        author_id: UserId::new(author),
        created_at: Utc::now(),
        deleted_at: None,
        comments: vec![],
    }
}
