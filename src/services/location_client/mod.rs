pub mod client;
pub mod find_place_details;
pub mod types;
