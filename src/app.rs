use crate::{middlewares::auth::auth_middleware, routes::apply_routes, types::app_state::AppState};
use axum::{middleware, routing::get, Router};
use google_locations::LocationClient;
use tower_http::cors::CorsLayer;

pub fn gen_app(location_client: LocationClient, auth_key: Option<String>) -> Router {
    let state = AppState {
        location_client,
        auth_key,
    };

    apply_routes(Router::new())
        .route("/", get(root))
        .layer(CorsLayer::new())
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            auth_middleware,
        ))
        .with_state(state)
}

async fn root() -> &'static str {
    "OK"
}

#[cfg(test)]
pub struct MockApp {
    pub app: Router,
    pub google_server: mockito::ServerGuard,
}

/// App wired to a mockito server standing in for the Google Maps API.
#[cfg(test)]
pub async fn gen_mock_app() -> MockApp {
    use google_locations::LocationClientConfig;

    let google_server = mockito::Server::new_async().await;
    let location_client = LocationClient::with_config(LocationClientConfig {
        api_key: "fake_key".to_string(),
        host: google_server.url(),
    });

    MockApp {
        app: gen_app(location_client, None),
        google_server,
    }
}
