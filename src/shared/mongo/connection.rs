use std::time::Duration;

use mongodb::{
    bson::doc,
    options::{ClientOptions, IndexOptions, ServerApi, ServerApiVersion},
    Client, Database, IndexModel,
};
use tracing::info;

use super::{USERS_COLLECTION, VIDEOS_COLLECTION};

#[derive(Debug, Clone)]
pub struct MongoSettings {
    pub uri: String,
    pub database: String,
    pub max_pool_size: u32,
    pub connect_timeout: Duration,
}

/// Opens the shared client. The driver pools connections internally, so one
/// `Database` handle is cloned into every worker.
pub async fn connect(settings: &MongoSettings) -> mongodb::error::Result<Database> {
    let mut options = ClientOptions::parse(&settings.uri).await?;
    options.app_name = Some(env!("CARGO_PKG_NAME").to_string());
    options.max_pool_size = Some(settings.max_pool_size);
    options.connect_timeout = Some(settings.connect_timeout);
    options.server_selection_timeout = Some(settings.connect_timeout);
    options.server_api = Some(ServerApi::builder().version(ServerApiVersion::V1).build());

    let client = Client::with_options(options)?;
    Ok(client.database(&settings.database))
}

pub async fn ping(db: &Database) -> mongodb::error::Result<()> {
    db.client()
        .database("admin")
        .run_command(doc! { "ping": 1 })
        .await?;
    Ok(())
}

pub async fn ensure_indexes(db: &Database) -> mongodb::error::Result<()> {
    let users = db.collection::<mongodb::bson::Document>(USERS_COLLECTION);
    let unique = || IndexOptions::builder().unique(true).build();

    users
        .create_index(
            IndexModel::builder()
                .keys(doc! { "email": 1 })
                .options(unique())
                .build(),
        )
        .await?;
    users
        .create_index(
            IndexModel::builder()
                .keys(doc! { "token": 1 })
                .options(unique())
                .build(),
        )
        .await?;

    db.collection::<mongodb::bson::Document>(VIDEOS_COLLECTION)
        .create_index(
            IndexModel::builder()
                .keys(doc! { "author_id": 1, "created": -1 })
                .build(),
        )
        .await?;

    info!(database = %db.name(), "MongoDB indexes ensured");
    Ok(())
}
