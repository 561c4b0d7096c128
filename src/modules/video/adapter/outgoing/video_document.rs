use mongodb::bson::{doc, oid::ObjectId, DateTime as BsonDateTime, Document};
use serde::{Deserialize, Serialize};

use crate::shared::mongo::{from_bson_date, null_as_empty, to_bson_date};
use crate::user::application::domain::entities::UserId;
use crate::video::application::{
    domain::entities::{Video, VideoId},
    ports::outgoing::{CreateVideoData, VideoListFilter},
};

/// Stored shape of a `videos` document. `deleted` is null until the video is
/// soft deleted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VideoDocument {
    #[serde(rename = "_id")]
    pub id: ObjectId,
    pub title: String,
    pub content: String,
    pub url: String,
    pub author_id: String,
    pub created: BsonDateTime,
    #[serde(default)]
    pub deleted: Option<BsonDateTime>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub comments: Vec<String>,
}

impl VideoDocument {
    pub fn from_new(data: CreateVideoData) -> Self {
        Self {
            id: ObjectId::new(),
            title: data.title,
            content: data.content,
            url: data.url,
            author_id: data.author_id.as_str().to_string(),
            created: to_bson_date(data.created_at),
            deleted: None,
            comments: Vec::new(),
        }
    }

    pub fn into_video(self) -> Video {
        Video {
            id: VideoId::new(self.id.to_hex()),
            title: self.title,
            content: self.content,
            url: self.url,
            author_id: UserId::new(self.author_id),
            created_at: from_bson_date(self.created),
            deleted_at: self.deleted.map(from_bson_date),
            comments: self.comments,
        }
    }
}

/// `deleted: null` also matches documents that never had the field.
pub fn live_filter(filter: &VideoListFilter) -> Document {
    match filter {
        VideoListFilter::All => doc! { "deleted": null },
        VideoListFilter::Author(author) => doc! { "author_id": author.as_str(), "deleted": null },
    }
}

pub fn live_by_id(id: ObjectId) -> Document {
    doc! { "_id": id, "deleted": null }
}

pub fn live_owned_by(id: ObjectId, author: &UserId) -> Document {
    doc! { "_id": id, "author_id": author.as_str(), "deleted": null }
}

pub fn newest_first() -> Document {
    doc! { "created": -1 }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    #[test]
    fn every_read_filter_requires_live_video() {
        let id = ObjectId::new();
        let author = UserId::new("author-1");

        let filters = [
            live_filter(&VideoListFilter::All),
            live_filter(&VideoListFilter::Author(author.clone())),
            live_by_id(id),
            live_owned_by(id, &author),
        ];

        for filter in filters {
            assert!(matches!(filter.get("deleted"), Some(mongodb::bson::Bson::Null)));
        }
    }

    #[test]
    fn owned_filter_pins_author() {
        let id = ObjectId::new();
        let filter = live_owned_by(id, &UserId::new("author-1"));

        assert_eq!(filter.get_object_id("_id").unwrap(), id);
        assert_eq!(filter.get_str("author_id").unwrap(), "author-1");
    }

    #[test]
    fn new_document_is_live_and_uncommented() {
        let document = VideoDocument::from_new(CreateVideoData {
            title: "t".to_string(),
            content: "c".to_string(),
            url: "u".to_string(),
            author_id: UserId::new("a"),
            created_at: Utc::now(),
        });
        let id = document.id.to_hex();

        let video = document.into_video();

        assert_eq!(video.id.as_str(), id);
        assert!(!video.is_deleted());
        assert_eq!(video.comment_count(), 0);
    }

    #[test]
    fn stored_null_marker_reads_as_live() {
        let raw = doc! {
            "_id": ObjectId::new(),
            "title": "t",
            "content": "c",
            "url": "u",
            "author_id": "a",
            "created": BsonDateTime::now(),
            "deleted": null,
        };

        let document: VideoDocument = mongodb::bson::from_document(raw).unwrap();

        assert!(document.deleted.is_none());
        assert!(document.comments.is_empty());
    }

    #[test]
    fn stored_null_comments_read_as_empty() {
        let raw = doc! {
            "_id": ObjectId::new(),
            "title": "t",
            "content": "c",
            "url": "u",
            "author_id": "a",
            "created": BsonDateTime::now(),
            "deleted": null,
            "comments": null,
        };

        let document: VideoDocument = mongodb::bson::from_document(raw).unwrap();

        assert!(document.comments.is_empty());
    }
}
