mod connection;
mod existence;

pub use connection::{connect, ensure_indexes, ping, MongoSettings};
pub use existence::{document_absent, document_exists};

use chrono::{DateTime, Utc};
use mongodb::bson::{oid::ObjectId, DateTime as BsonDateTime};
use mongodb::error::{Error as MongoError, ErrorKind, WriteFailure};
use mongodb::options::{Collation, CollationStrength};
use serde::{Deserialize, Deserializer};

pub const USERS_COLLECTION: &str = "users";
pub const VIDEOS_COLLECTION: &str = "videos";

const DUPLICATE_KEY_CODE: i32 = 11000;

/// True when the write was rejected by a unique index.
pub fn is_duplicate_key(err: &MongoError) -> bool {
    match err.kind.as_ref() {
        ErrorKind::Write(WriteFailure::WriteError(we)) => we.code == DUPLICATE_KEY_CODE,
        _ => false,
    }
}

/// A malformed id cannot match any document, so callers treat `None` as not found.
pub fn parse_object_id(id: &str) -> Option<ObjectId> {
    ObjectId::parse_str(id.trim()).ok()
}

pub fn to_bson_date(at: DateTime<Utc>) -> BsonDateTime {
    BsonDateTime::from_millis(at.timestamp_millis())
}

pub fn from_bson_date(at: BsonDateTime) -> DateTime<Utc> {
    DateTime::from_timestamp_millis(at.timestamp_millis()).unwrap_or_default()
}

/// Case-insensitive comparison for lookups on values that older records
/// stored with their original casing.
pub fn case_insensitive() -> Collation {
    Collation::builder()
        .locale("en")
        .strength(CollationStrength::Secondary)
        .build()
}

/// Reads an array field that may be missing or stored as null.
pub fn null_as_empty<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(Option::<Vec<T>>::deserialize(deserializer)?.unwrap_or_default())
}
