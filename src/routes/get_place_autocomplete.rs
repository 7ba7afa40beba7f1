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
pub struct GetPlaceAutocompletePayload {
    #[validate(length(min = 1, message = "Must be at least 1 character"))]
    pub input: String,

    pub language: Option<String>,
}

pub async fn get_place_autocomplete(
    State(state): State<AppState>,
    ValidatedQuery(GetPlaceAutocompletePayload { input, language }): ValidatedQuery<
        GetPlaceAutocompletePayload,
    >,
) -> Result<Response, AppError> {
    let body = state
        .location_client
        .autocomplete(
            Params::new()
                .with("input", input)
                .with_optional("language", language),
        )
        .await
        .map_err(|e| {
            error!("Failed to fetch place autocomplete: {}", e);
            AppError::from(e)
        })?;

    Ok(Json(body).into_response())
}

#[cfg(test)]
mod tests {
    use axum::{
        body::{to_bytes, Body},
        http::{Request, StatusCode},
    };
    use mockito::Matcher;
    use tower::ServiceExt;

    use super::*;
    use crate::app::gen_mock_app;

    #[tokio::test]
    async fn test_get_place_autocomplete() {
        let mut mock_app = gen_mock_app().await;

        let mock_server = mock_app
            .google_server
            .mock("GET", "/maps/api/place/autocomplete/json")
            .match_query(Matcher::AllOf(vec![
                Matcher::UrlEncoded("input".into(), "Goo".into()),
                Matcher::UrlEncoded("language".into(), "en".into()),
            ]))
            .with_body(
                r#"{"predictions" : [{"description": "Google", "id":"1"}, {"description": "Goose Farm", "id": "3"}], "status" : "OK"}"#,
            )
            .create_async()
            .await;

        let response = mock_app
            .app
            .oneshot(
                Request::builder()
                    .uri("/place-autocomplete?input=Goo")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        mock_server.assert_async().await;
        assert_eq!(response.status(), StatusCode::OK);

        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body: serde_json::Value = serde_json::from_slice(&body).unwrap();

        assert_eq!(body["predictions"][0]["description"], "Google");
        assert_eq!(body["predictions"][1]["description"], "Goose Farm");
    }

    #[tokio::test]
    async fn test_get_place_autocomplete_rejects_empty_input() {
        let mock_app = gen_mock_app().await;

        let response = mock_app
            .app
            .oneshot(
                Request::builder()
                    .uri("/place-autocomplete?input=")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}
