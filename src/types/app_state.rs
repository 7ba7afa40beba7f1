use google_locations::LocationClient;

#[derive(Clone)]
pub struct AppState {
    pub location_client: LocationClient,
    pub auth_key: Option<String>,
}
