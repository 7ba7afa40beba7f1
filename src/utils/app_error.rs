use axum::{
    body::Body,
    http::{Response, StatusCode},
    response::IntoResponse,
    Json,
};
use google_locations::LocationClientError;
use serde::Serialize;

#[derive(Debug)]
pub struct AppError {
    pub code: StatusCode,
    pub message: String,
}

impl AppError {
    pub fn new(code: StatusCode, message: &str) -> Self {
        AppError {
            code,
            message: message.to_string(),
        }
    }
}

impl From<LocationClientError> for AppError {
    fn from(e: LocationClientError) -> Self {
        match e {
            LocationClientError::NotFound(message) => AppError::new(StatusCode::NOT_FOUND, &message),
            LocationClientError::Transport(_) | LocationClientError::Parse(_) => {
                AppError::new(StatusCode::BAD_GATEWAY, "Upstream request failed")
            }
            LocationClientError::InvalidUrl(_) => {
                AppError::new(StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error")
            }
        }
    }
}

#[derive(Serialize)]
struct ResponseJson {
    message: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response<Body> {
        (
            self.code,
            Json(ResponseJson {
                message: self.message,
            }),
        )
            .into_response()
    }
}
