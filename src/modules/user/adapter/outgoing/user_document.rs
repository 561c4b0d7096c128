use mongodb::bson::{doc, oid::ObjectId, Bson, DateTime as BsonDateTime, Document};
use serde::{Deserialize, Serialize};

use crate::shared::mongo::{from_bson_date, null_as_empty, to_bson_date};
use crate::user::application::{
    domain::entities::{AccessToken, User, UserActivity, UserId, VideoHistory},
    ports::outgoing::CreateUserData,
};
use crate::video::application::domain::entities::VideoId;

/// Stored shape of a `users` document. Older records may carry `null`
/// arrays and history entries keyed `videoid`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserDocument {
    #[serde(rename = "_id")]
    pub id: ObjectId,
    pub email: String,
    pub username: String,
    pub password: String,
    pub created: BsonDateTime,
    pub token: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub history: Vec<HistoryDocument>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub bookmark: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HistoryDocument {
    #[serde(alias = "videoid")]
    pub video_id: String,
    pub date: BsonDateTime,
}

impl UserDocument {
    pub fn from_new(data: CreateUserData) -> Self {
        Self {
            id: ObjectId::new(),
            email: data.email,
            username: data.username,
            password: data.password_hash,
            created: to_bson_date(data.created_at),
            token: data.token.as_str().to_string(),
            history: Vec::new(),
            bookmark: Vec::new(),
        }
    }

    pub fn into_user(self) -> User {
        User {
            id: UserId::new(self.id.to_hex()),
            email: self.email,
            username: self.username,
            password_hash: self.password,
            created_at: from_bson_date(self.created),
            token: AccessToken::new(self.token),
            history: self
                .history
                .into_iter()
                .map(|h| VideoHistory {
                    video_id: VideoId::new(h.video_id),
                    date: from_bson_date(h.date),
                })
                .collect(),
            bookmarks: self.bookmark.into_iter().map(VideoId::new).collect(),
        }
    }
}

pub fn by_email(email: &str) -> Document {
    doc! { "email": email }
}

pub fn by_token(token: &AccessToken) -> Document {
    doc! { "token": token.as_str() }
}

/// Pipeline updates evaluate `$`-prefixed strings as field paths, so every
/// caller-supplied value goes in as a literal.
fn literal(value: &str) -> Bson {
    Bson::Document(doc! { "$literal": value })
}

/// Builds the aggregation-pipeline update for one activity batch.
///
/// Stages run in order: history (drop the previous entry for the video, then
/// append), bookmark add (only when absent), bookmark removal. Each stage
/// tolerates a missing or null array field.
pub fn activity_pipeline(activity: &UserActivity) -> Vec<Document> {
    let mut stages = Vec::new();

    if let Some(watched) = &activity.watched {
        let video_id = literal(watched.video_id.as_str());
        stages.push(doc! {
            "$set": {
                "history": {
                    "$concatArrays": [
                        {
                            "$filter": {
                                "input": { "$ifNull": ["$history", []] },
                                "cond": {
                                    "$and": [
                                        { "$ne": ["$$this.video_id", video_id.clone()] },
                                        { "$ne": ["$$this.videoid", video_id.clone()] },
                                    ]
                                },
                            }
                        },
                        [ { "video_id": video_id, "date": to_bson_date(watched.date) } ],
                    ]
                }
            }
        });
    }

    if let Some(video_id) = &activity.add_bookmark {
        let video_id = literal(video_id.as_str());
        stages.push(doc! {
            "$set": {
                "bookmark": {
                    "$cond": [
                        { "$in": [video_id.clone(), { "$ifNull": ["$bookmark", []] }] },
                        { "$ifNull": ["$bookmark", []] },
                        { "$concatArrays": [{ "$ifNull": ["$bookmark", []] }, [video_id]] },
                    ]
                }
            }
        });
    }

    if let Some(video_id) = &activity.remove_bookmark {
        stages.push(doc! {
            "$set": {
                "bookmark": {
                    "$filter": {
                        "input": { "$ifNull": ["$bookmark", []] },
                        "cond": { "$ne": ["$$this", literal(video_id.as_str())] },
                    }
                }
            }
        });
    }

    stages
}
