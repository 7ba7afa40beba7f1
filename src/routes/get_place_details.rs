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
pub struct GetPlaceDetailsPayload {
    #[validate(length(min = 1, message = "Must be at least 1 character"))]
    pub placeid: String,

    pub language: Option<String>,
}

pub async fn get_place_details(
    State(state): State<AppState>,
    ValidatedQuery(GetPlaceDetailsPayload { placeid, language }): ValidatedQuery<
        GetPlaceDetailsPayload,
    >,
) -> Result<Response, AppError> {
    let body = state
        .location_client
        .details(
            Params::new()
                .with("placeid", placeid)
                .with_optional("language", language),
        )
        .await
        .map_err(|e| {
            error!("Failed to fetch place details: {}", e);
            AppError::from(e)
        })?;

    Ok(Json(body).into_response())
}
