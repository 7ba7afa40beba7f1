//! Client for a subset of the Google Maps Places and Geocoding web services.
//!
//! Every operation returns the decoded JSON body untouched. A response whose
//! `status` is not `"OK"` is still a successful call; callers check `status`
//! themselves.

pub mod services;

pub use services::location_client::{
    client::{LocationClient, LocationClientConfig, DEFAULT_HOST},
    find_place_details::PlaceDetailsByAddressInput,
    types::{
        endpoint::{Action, Category},
        location_client_error::LocationClientError,
        query_params::{ParamValue, Params},
    },
};
