//! Raw collection dump for local debugging. Compiled only with the
//! `debug-routes` feature; startup refuses the feature in production.

use actix_web::{get, web, HttpResponse};
use futures::TryStreamExt;
use mongodb::{bson::Document, Database};
use tracing::{error, warn};

use crate::shared::api::ApiResponse;

const MAX_DOCUMENTS: i64 = 1000;

#[get("/debug/{col_name}")]
pub async fn dump_collection(path: web::Path<String>, db: web::Data<Database>) -> HttpResponse {
    let col_name = path.into_inner();
    warn!(collection = %col_name, "Debug dump requested");

    let cursor = match db
        .collection::<Document>(&col_name)
        .find(Document::new())
        .limit(MAX_DOCUMENTS)
        .await
    {
        Ok(cursor) => cursor,
        Err(e) => {
            error!(error = %e, collection = %col_name, "Debug dump failed");
            return ApiResponse::internal_error();
        }
    };

    match cursor.try_collect::<Vec<Document>>().await {
        Ok(documents) => {
            // Extended JSON keeps ObjectIds and dates readable.
            let documents: Vec<serde_json::Value> = documents
                .into_iter()
                .map(|d| mongodb::bson::Bson::Document(d).into_relaxed_extjson())
                .collect();
            ApiResponse::success(documents)
        }
        Err(e) => {
            error!(error = %e, collection = %col_name, "Debug dump failed");
            ApiResponse::internal_error()
        }
    }
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(dump_collection);
}
