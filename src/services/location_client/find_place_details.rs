use serde_json::Value;
use tracing::debug;

use super::{
    client::LocationClient,
    types::{location_client_error::LocationClientError, query_params::Params},
};

pub struct PlaceDetailsByAddressInput {
    pub address: String,
    /// Picks the search result with this name. Without it the nearest result wins.
    pub name: Option<String>,
    pub language: Option<String>,
}

fn geocoded_location(geocode: &Value) -> Option<(f64, f64)> {
    let location = &geocode["results"][0]["geometry"]["location"];
    Some((location["lat"].as_f64()?, location["lng"].as_f64()?))
}

fn matching_place_id<'a>(search: &'a Value, name: Option<&str>) -> Option<&'a str> {
    let results = search["results"].as_array()?;
    let place = match name {
        Some(name) => results.iter().find(|place| {
            place["name"]
                .as_str()
                .is_some_and(|candidate| candidate.eq_ignore_ascii_case(name))
        })?,
        None => results.first()?,
    };
    place["place_id"].as_str()
}

impl LocationClient {
    /// Geocodes `address`, searches around the result for `name`, and returns
    /// the details response of the first match.
    ///
    /// Stops at the first failing step. A geocode without coordinates or a
    /// search without a matching place is [`LocationClientError::NotFound`].
    pub async fn find_place_details_with_address(
        &self,
        input: PlaceDetailsByAddressInput,
    ) -> Result<Value, LocationClientError> {
        let PlaceDetailsByAddressInput {
            address,
            name,
            language,
        } = input;

        let geocode = self
            .geocode_address(
                Params::new()
                    .with("address", address.as_str())
                    .with_optional("language", language.clone()),
            )
            .await?;
        let (lat, lng) = geocoded_location(&geocode).ok_or_else(|| {
            LocationClientError::NotFound(format!("No coordinates for address {}", address))
        })?;

        // rankby=distance forbids a radius, so the default is blanked out.
        let search = self
            .search(
                Params::new()
                    .with("location", [lat, lng])
                    .with("rankby", "distance")
                    .with("radius", "")
                    .with_optional("language", language.clone()),
            )
            .await?;
        let place_id = matching_place_id(&search, name.as_deref()).ok_or_else(|| {
            LocationClientError::NotFound(format!(
                "No place named {} near {},{}",
                name.as_deref().unwrap_or("<any>"),
                lat,
                lng
            ))
        })?;
        debug!(place_id, "Found place for address");

        self.details(
            Params::new()
                .with("placeid", place_id)
                .with_optional("language", language),
        )
        .await
    }
}
