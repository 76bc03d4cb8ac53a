use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use burrow_core::ShortenerError;
use thiserror::Error;
use tracing::{debug, error};

use crate::model::ErrorResponse;

pub type Result<T> = std::result::Result<T, AppError>;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Missing URL")]
    MissingUrl,
    #[error("Invalid URL")]
    InvalidUrl(String),
    #[error("Not found")]
    NotFound,
    #[error("Could not generate unique code")]
    Shortener(#[from] ShortenerError),
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::MissingUrl | AppError::InvalidUrl(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound => StatusCode::NOT_FOUND,
            AppError::Shortener(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        match &self {
            AppError::InvalidUrl(reason) => debug!(%reason, "rejected url"),
            AppError::Shortener(source) => error!(error = %source, "shortening failed"),
            AppError::MissingUrl | AppError::NotFound => {}
        }

        let body = ErrorResponse {
            error: self.to_string(),
        };
        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_codes() {
        assert_eq!(AppError::MissingUrl.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            AppError::InvalidUrl("nope".into()).status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(AppError::NotFound.status(), StatusCode::NOT_FOUND);

        let exhausted = AppError::from(ShortenerError::AllocationExhausted { attempts: 10 });
        assert_eq!(exhausted.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(exhausted.to_string(), "Could not generate unique code");
    }
}
