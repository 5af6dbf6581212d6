use std::{
    env,
    net::{IpAddr, SocketAddr},
    sync::Arc,
    time::Duration,
};

#[macro_use]
extern crate lazy_static;

use axum::{
    error_handling::HandleErrorLayer,
    extract::DefaultBodyLimit,
    http::header::{AUTHORIZATION, CONTENT_TYPE},
    http::Method,
    routing::{get, post},
    BoxError, Router,
};
use tower::{buffer::BufferLayer, limit::ConcurrencyLimitLayer, ServiceBuilder};
use tower_http::cors::{Any, CorsLayer};

use crate::{
    app::{env::Envy, errors::DefaultApiError, models::api_error::ApiError},
    config::service::ConfigStore,
};

mod app;
mod config;
mod images;
#[cfg(test)]
mod test_util;

const DEFAULT_PORT: u16 = 5005;
const DEFAULT_CONFIG_PATH: &str = "config";
const DEFAULT_SD_TIMEOUT_SECS: u64 = 300;
const DEFAULT_MAX_CONCURRENT_REQUESTS: usize = 64;
const DEFAULT_MAX_UPLOAD_BYTES: usize = 25 * 1024 * 1024;

#[derive(Clone)]
pub struct AppState {
    pub envy: Arc<Envy>,
    pub config: Arc<ConfigStore>,
    pub client: reqwest::Client,
}

pub fn router(state: AppState) -> Router {
    let max_upload_bytes = state
        .envy
        .max_upload_bytes
        .unwrap_or(DEFAULT_MAX_UPLOAD_BYTES);
    let max_concurrent_requests = state
        .envy
        .max_concurrent_requests
        .unwrap_or(DEFAULT_MAX_CONCURRENT_REQUESTS);

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_headers([CONTENT_TYPE, AUTHORIZATION])
        .allow_methods([Method::POST, Method::GET]);

    Router::new()
        .route("/", get(app::controller::get_root))
        .route("/v1/models", get(app::controller::get_models))
        // images
        .route(
            "/v1/images/generations",
            post(images::controller::generate_images),
        )
        .route(
            "/v1/images/variations",
            post(images::controller::create_variations),
        )
        .route("/v1/images/edits", post(images::controller::edit_images))
        // layers
        .layer(DefaultBodyLimit::max(max_upload_bytes))
        .layer(cors)
        .layer(
            ServiceBuilder::new()
                .layer(HandleErrorLayer::new(handle_overload))
                .layer(BufferLayer::new(1024))
                .layer(ConcurrencyLimitLayer::new(max_concurrent_requests)),
        )
        .with_state(state)
}

async fn handle_overload(err: BoxError) -> ApiError {
    tracing::error!(%err);
    DefaultApiError::ServiceUnavailable.value()
}

#[tokio::main]
async fn main() {
    // environment
    let app_env = env::var("APP_ENV").unwrap_or("development".to_string());
    let _ = dotenvy::from_filename(format!(".env.{}", app_env));

    // tracing
    tracing_subscriber::fmt::init();

    let envy = match envy::from_env::<Envy>() {
        Ok(config) => config,
        Err(e) => panic!("{:#?}", e),
    };

    // properties
    let host = envy.host.clone().unwrap_or("0.0.0.0".to_string());
    let port = envy.port.unwrap_or(DEFAULT_PORT);
    let ip: IpAddr = host.parse().expect("HOST must be an ip address");
    let addr = SocketAddr::new(ip, port);

    let config_path = envy
        .config_path
        .clone()
        .unwrap_or(DEFAULT_CONFIG_PATH.to_string());
    let config = ConfigStore::new(config_path);
    if !config.dir().exists() {
        tracing::warn!(
            "config directory {} not found, using built-in defaults",
            config.dir().display()
        );
    }

    let client = reqwest::Client::builder()
        .timeout(Duration::from_secs(
            envy.sd_timeout_secs.unwrap_or(DEFAULT_SD_TIMEOUT_SECS),
        ))
        .build()
        .expect("failed to build http client");

    let state = AppState {
        envy: Arc::new(envy),
        config: Arc::new(config),
        client,
    };

    // app
    let app = router(state);

    tracing::info!("listening on {}", addr);

    if let Err(e) = axum::Server::bind(&addr)
        .serve(app.into_make_service())
        .await
    {
        tracing::error!(%e);
    }
}
