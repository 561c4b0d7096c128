pub mod modules;
pub use modules::user;
pub use modules::video;

mod api;
mod config;
pub mod health;
mod shared;

// Raw collection dump - only compiled with feature flag
#[cfg(feature = "debug-routes")]
mod debug_routes;

use actix_cors::Cors;
use actix_web::{http::header, middleware::Logger, web, App, HttpServer};
use anyhow::Context;
use std::sync::Arc;

use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::api::openapi::ApiDoc;
use crate::config::AppConfig;
use crate::shared::api::custom_json_config;
use crate::shared::mongo;
use crate::user::{
    adapter::outgoing::{
        security::{Argon2Hasher, LegacyAwareHasher},
        RandomTokenGenerator, UserQueryMongo, UserRepositoryMongo,
    },
    application::user_use_cases::UserUseCases,
};
use crate::video::{
    adapter::outgoing::{VideoQueryMongo, VideoRepositoryMongo},
    application::video_use_cases::VideoUseCases,
};

#[cfg(test)]
mod tests;

#[derive(Clone)]
pub struct AppState {
    pub user: UserUseCases,
    pub video: VideoUseCases,
}

#[actix_web::main]
#[cfg(not(tarpaulin_include))]
async fn start() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,actix_web=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting application...");

    let config = AppConfig::from_env()?;

    #[cfg(feature = "debug-routes")]
    tracing::warn!(
        environment = %config.environment,
        "Debug routes are ENABLED"
    );

    // Database connection
    let db = mongo::connect(&config.mongo)
        .await
        .context("Failed to configure MongoDB client")?;

    match mongo::ping(&db).await {
        Ok(()) => info!(database = %config.mongo.database, "Connected to MongoDB"),
        Err(e) => error!(error = %e, "MongoDB ping failed; continuing"),
    }

    if let Err(e) = mongo::ensure_indexes(&db).await {
        error!(error = %e, "Failed to ensure MongoDB indexes");
    }

    let argon2 = Argon2Hasher::with_params(
        config.argon2.memory_kib,
        config.argon2.iterations,
        config.argon2.parallelism,
    )
    .map_err(|e| anyhow::anyhow!("Invalid Argon2 parameters: {e}"))?;

    let state = AppState {
        user: UserUseCases::wire(
            UserQueryMongo::new(&db),
            UserRepositoryMongo::new(&db),
            Arc::new(LegacyAwareHasher::new(argon2)),
            Arc::new(RandomTokenGenerator::new()),
        ),
        video: VideoUseCases::wire(VideoQueryMongo::new(&db), VideoRepositoryMongo::new(&db)),
    };

    let server_url = config.server_url();
    info!(%server_url, environment = %config.environment, "Server starting");

    let openapi = ApiDoc::openapi();

    HttpServer::new(move || {
        let cors = Cors::default()
            .allow_any_origin()
            .allow_any_method()
            .allowed_headers(vec![header::ORIGIN, header::CONTENT_TYPE, header::ACCEPT]);

        let app = App::new()
            .wrap(cors)
            .wrap(Logger::default())
            .app_data(web::Data::new(state.clone()))
            .app_data(web::Data::new(db.clone()))
            .app_data(custom_json_config())
            .service(SwaggerUi::new("/docs/{_:.*}").url("/api-docs/openapi.json", openapi.clone()))
            .configure(init_routes);

        // Conditionally add debug routes
        #[cfg(feature = "debug-routes")]
        let app = app.configure(debug_routes::configure_routes);

        app
    })
    .bind(&server_url)
    .with_context(|| format!("Failed to bind {server_url}"))?
    .run()
    .await?;

    Ok(())
}

fn init_routes(cfg: &mut web::ServiceConfig) {
    // Health
    cfg.service(crate::health::root);
    cfg.service(crate::health::health);
    cfg.service(crate::health::readiness);
    // Users
    cfg.service(crate::user::adapter::incoming::web::routes::register_user_handler);
    cfg.service(crate::user::adapter::incoming::web::routes::login_user_handler);
    cfg.service(crate::user::adapter::incoming::web::routes::get_my_info_handler);
    cfg.service(crate::user::adapter::incoming::web::routes::update_user_handler);
    // Videos
    cfg.service(crate::video::adapter::incoming::web::routes::create_video_handler);
    cfg.service(crate::video::adapter::incoming::web::routes::get_all_videos_handler);
    cfg.service(crate::video::adapter::incoming::web::routes::get_user_videos_handler);
    cfg.service(crate::video::adapter::incoming::web::routes::get_video_handler);
    cfg.service(crate::video::adapter::incoming::web::routes::delete_video_handler);
    cfg.service(crate::video::adapter::incoming::web::routes::add_comment_handler);
}

#[cfg(not(tarpaulin_include))]
fn main() {
    if let Err(e) = start() {
        eprintln!("Error starting app: {e:#}");
    }
}
