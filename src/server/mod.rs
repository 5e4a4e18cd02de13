// src/server/mod.rs - HTTP API for health, version and translations
pub mod routes;

use crate::core::config::ServerConfig;
use crate::core::error::{AppError, Result};
use actix_cors::Cors;
use actix_web::middleware::{Condition, Logger};
use actix_web::{web, App, HttpServer};

/// Registers every API route; shared by the server and the tests.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/api/health", web::get().to(routes::health_check))
        .route("/api/version", web::get().to(routes::version_info))
        .route("/api/locales", web::get().to(routes::locales))
        .route(
            "/api/translations",
            web::get().to(routes::default_translations),
        )
        .route(
            "/api/translations/{locale}",
            web::get().to(routes::translations),
        );
}

/// Serves the API until the process is interrupted.
pub async fn run(config: &ServerConfig) -> Result<()> {
    let cors_enabled = config.cors_enabled;
    let request_logs = config.request_logs;
    let bind_addr = config.bind_address();

    log::info!("Starting API server on {}", bind_addr);

    let server = HttpServer::new(move || {
        let cors = if cors_enabled {
            Cors::permissive()
        } else {
            Cors::default()
        };

        App::new()
            .wrap(Condition::new(request_logs, Logger::default()))
            .wrap(cors)
            .configure(configure)
    })
    .workers(config.workers)
    .bind((config.host.as_str(), config.port))
    .map_err(AppError::Io)?;

    server.run().await.map_err(AppError::Io)?;
    log::info!("API server stopped");
    Ok(())
}
