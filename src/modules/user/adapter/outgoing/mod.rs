pub mod security;
mod random_token_generator;
mod user_document;
mod user_query_mongo;
mod user_repository_mongo;

pub use random_token_generator::RandomTokenGenerator;
pub use user_document::UserDocument;
pub use user_query_mongo::UserQueryMongo;
pub use user_repository_mongo::UserRepositoryMongo;
