mod video_document;
mod video_query_mongo;
mod video_repository_mongo;

pub use video_document::VideoDocument;
pub use video_query_mongo::VideoQueryMongo;
pub use video_repository_mongo::VideoRepositoryMongo;
