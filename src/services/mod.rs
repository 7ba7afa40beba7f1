pub mod location_client;
