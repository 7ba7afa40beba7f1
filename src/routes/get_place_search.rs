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
pub struct GetPlaceSearchPayload {
    /// `lat,lng`
    #[validate(length(min = 3, message = "Must be a lat,lng pair"))]
    pub location: String,

    #[validate(range(min = 1, max = 50000))]
    pub radius: Option<u32>,

    pub rankby: Option<String>,

    pub keyword: Option<String>,

    pub language: Option<String>,
}

pub async fn get_place_search(
    State(state): State<AppState>,
    ValidatedQuery(payload): ValidatedQuery<GetPlaceSearchPayload>,
) -> Result<Response, AppError> {
    // rankby=distance forbids a radius, so the default is blanked out.
    let radius = match (payload.radius, payload.rankby.as_deref()) {
        (Some(radius), _) => Some(radius.to_string()),
        (None, Some("distance")) => Some(String::new()),
        (None, _) => None,
    };

    let params = Params::new()
        .with("location", payload.location)
        .with_optional("radius", radius)
        .with_optional("rankby", payload.rankby)
        .with_optional("keyword", payload.keyword)
        .with_optional("language", payload.language);

    let body = state
        .location_client
        .search(params)
        .await
        .map_err(|e| {
            error!("Failed to search places: {}", e);
            AppError::from(e)
        })?;

    Ok(Json(body).into_response())
}
