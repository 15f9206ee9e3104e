use axum::http::{header, HeaderName, HeaderValue, Method};
use dotenvy::dotenv;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

mod abstract_trait;
mod config;
mod controllers;
mod db;
mod domain;
mod errors;
mod middleware;
mod models;
mod repository;
mod routes;
mod services;
mod state;
#[cfg(test)]
mod testing;
mod utils;

use config::Config;
use middleware::jwt::ACCESS_TOKEN_HEADER;

#[tokio::main]
async fn main() {
    dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    once_cell::sync::Lazy::force(&controllers::health::START_TIME);

    let config = match Config::init() {
        Ok(config) => config,
        Err(e) => {
            error!("Invalid configuration: {e:#}");
            std::process::exit(1);
        }
    };

    let database = match db::connection::init_db(&config).await {
        Ok(db) => db,
        Err(e) => {
            error!("Failed to initialize database: {}", e);
            std::process::exit(1);
        }
    };

    if let Err(e) = db::connection::ensure_indexes(&database).await {
        error!("Failed to create indexes: {}", e);
        std::process::exit(1);
    }

    let app_state = state::AppState::from_database(&database, &config);

    let origin = match config.cors_origin.parse::<HeaderValue>() {
        Ok(origin) => origin,
        Err(_) => {
            error!("Failed to parse CORS origin: {}", config.cors_origin);
            std::process::exit(1);
        }
    };

    let cors = CorsLayer::new()
        .allow_origin(origin)
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE, Method::OPTIONS])
        .allow_headers([
            header::CONTENT_TYPE,
            header::ACCEPT,
            header::USER_AGENT,
            header::COOKIE,
            HeaderName::from_static("x-requested-with"),
            HeaderName::from_static(ACCESS_TOKEN_HEADER),
        ])
        .allow_credentials(true);

    let app = routes::app(app_state)
        .layer(cors)
        .layer(TraceLayer::new_for_http());

    let listener = match tokio::net::TcpListener::bind(config.server_addr).await {
        Ok(l) => l,
        Err(e) => {
            error!("Failed to bind to address {}: {}", config.server_addr, e);
            std::process::exit(1);
        }
    };

    info!("Server running at http://{}", config.server_addr);
    info!("CORS origin: {}", config.cors_origin);

    let served = axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await;

    database.client().clone().shutdown().await;
    info!("Database connection closed");

    if let Err(e) = served {
        error!("Server error: {}", e);
        std::process::exit(1);
    }
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}
