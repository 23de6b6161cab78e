use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;

/// Expected, caller-visible failures of the shortening core. Nothing at this
/// layer is fatal or retried.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ShortenerError {
    #[error("url is required")]
    InvalidInput,

    #[error("url not found")]
    NotFound,
}

impl IntoResponse for ShortenerError {
    fn into_response(self) -> Response {
        let status = match &self {
            ShortenerError::InvalidInput => StatusCode::BAD_REQUEST,
            ShortenerError::NotFound => StatusCode::NOT_FOUND,
        };
        (status, self.to_string()).into_response()
    }
}
