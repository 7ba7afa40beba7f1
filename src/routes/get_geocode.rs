use crate::{
    types::app_state::AppState,
    utils::{app_error::AppError, validated_query::ValidatedQuery},
};
use axum::{
    extract::State,
    response::{IntoResponse, Response},
    Json,
};
use google_locations::Params;
use serde::Deserialize;
use tracing::error;
use validator::Validate;

#[derive(Validate, Deserialize)]
pub struct GetGeocodePayload {
    #[validate(length(min = 1, message = "Must be at least 1 character"))]
    pub address: String,

    pub language: Option<String>,
}

pub async fn get_geocode(
    State(state): State<AppState>,
    ValidatedQuery(GetGeocodePayload { address, language }): ValidatedQuery<GetGeocodePayload>,
) -> Result<Response, AppError> {
    let body = state
        .location_client
        .geocode_address(
            Params::new()
                .with("address", address)
                .with_optional("language", language),
        )
        .await
        .map_err(|e| {
            error!("Failed to geocode address: {}", e);
            AppError::from(e)
        })?;

    Ok(Json(body).into_response())
}
