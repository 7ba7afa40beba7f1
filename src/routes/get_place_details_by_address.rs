use crate::{
    types::app_state::AppState,
    utils::{app_error::AppError, validated_query::ValidatedQuery},
};
use axum::{
    extract::State,
    response::{IntoResponse, Response},
    Json,
};
use google_locations::PlaceDetailsByAddressInput;
use serde::Deserialize;
use tracing::error;
use validator::Validate;

#[derive(Validate, Deserialize)]
pub struct GetPlaceDetailsByAddressPayload {
    #[validate(length(min = 1, message = "Must be at least 1 character"))]
    pub address: String,

    #[validate(length(min = 1, message = "Must be at least 1 character"))]
    pub name: String,

    pub language: Option<String>,
}

pub async fn get_place_details_by_address(
    State(state): State<AppState>,
    ValidatedQuery(GetPlaceDetailsByAddressPayload {
        address,
        name,
        language,
    }): ValidatedQuery<GetPlaceDetailsByAddressPayload>,
) -> Result<Response, AppError> {
    let body = state
        .location_client
        .find_place_details_with_address(PlaceDetailsByAddressInput {
            address,
            name: Some(name),
            language,
        })
        .await
        .map_err(|e| {
            error!("Failed to find place details by address: {}", e);
            AppError::from(e)
        })?;

    Ok(Json(body).into_response())
}
