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
pub struct GetReverseGeocodePayload {
    #[validate(range(min = -90.0, max = 90.0))]
    pub lat: f64,

    #[validate(range(min = -180.0, max = 180.0))]
    pub lng: f64,

    pub language: Option<String>,
}

pub async fn get_reverse_geocode(
    State(state): State<AppState>,
    ValidatedQuery(GetReverseGeocodePayload { lat, lng, language }): ValidatedQuery<
        GetReverseGeocodePayload,
    >,
) -> Result<Response, AppError> {
    let body = state
        .location_client
        .reverse_geocode(
            Params::new()
                .with("latlng", [lat, lng])
                .with_optional("language", language),
        )
        .await
        .map_err(|e| {
            error!("Failed to reverse geocode {},{}: {}", lat, lng, e);
            AppError::from(e)
        })?;

    Ok(Json(body).into_response())
}
