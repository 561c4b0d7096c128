use actix_web::{get, web, HttpResponse, Responder};
use mongodb::Database;
use serde::Serialize;
use tracing::warn;

use crate::shared::mongo;

#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
}

#[derive(Serialize)]
struct ReadinessResponse {
    status: &'static str,
    database: &'static str,
}

#[get("/")]
pub async fn root() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse { status: "ok" })
}

/// LIVENESS PROBE
/// - No I/O
#[get("/health")]
pub async fn health() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse { status: "ok" })
}

/// READINESS PROBE
/// - Pings the database
#[get("/ready")]
pub async fn readiness(db: web::Data<Database>) -> impl Responder {
    match mongo::ping(&db).await {
        Ok(()) => HttpResponse::Ok().json(ReadinessResponse {
            status: "ok",
            database: "ok",
        }),
        Err(e) => {
            warn!(error = %e, "Readiness check failed");
            HttpResponse::ServiceUnavailable().json(ReadinessResponse {
                status: "unhealthy",
                database: "unhealthy",
            })
        }
    }
}
