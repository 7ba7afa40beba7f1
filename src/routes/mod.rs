use axum::{routing::get, Router};

use crate::types::app_state::AppState;

mod get_geocode;
mod get_place_autocomplete;
mod get_place_details;
mod get_place_details_by_address;
mod get_place_search;
mod get_reverse_geocode;

pub fn apply_routes(app: Router<AppState>) -> Router<AppState> {
    app.route("/place-search", get(get_place_search::get_place_search))
        .route(
            "/place-autocomplete",
            get(get_place_autocomplete::get_place_autocomplete),
        )
        .route("/place-details", get(get_place_details::get_place_details))
        .route("/geocode", get(get_geocode::get_geocode))
        .route(
            "/reverse-geocode",
            get(get_reverse_geocode::get_reverse_geocode),
        )
        .route(
            "/place-details-by-address",
            get(get_place_details_by_address::get_place_details_by_address),
        )
}
