pub mod endpoint;
pub mod location_client_error;
pub mod query_params;
