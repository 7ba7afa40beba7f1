mod app;
mod middlewares;
mod routes;
mod types;
mod utils;

use std::env;

use google_locations::{LocationClient, LocationClientConfig, DEFAULT_HOST};
use tracing::info;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt::init();
    info!("Starting app...");

    let api_key = env::var("GOOGLE_MAPS_API_KEY").expect("GOOGLE_MAPS_API_KEY must be set");
    let host = env::var("GOOGLE_MAPS_HOST").unwrap_or_else(|_| DEFAULT_HOST.to_string());
    let auth_key = env::var("AUTH_KEY").ok();

    let location_client = LocationClient::with_config(LocationClientConfig { api_key, host });
    let app = app::gen_app(location_client, auth_key);

    let listener = tokio::net::TcpListener::bind("0.0.0.0:3000")
        .await
        .expect("Failed to bind 0.0.0.0:3000");
    info!("Listening on 0.0.0.0:3000");
    axum::serve(listener, app).await.expect("Server error");
}
