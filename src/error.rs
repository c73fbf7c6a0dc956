use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;
use tracing::{debug, error};

pub type AppResult<T> = Result<T, AppError>;

/// Application error, mapped onto the wire contract by `IntoResponse`.
#[derive(Debug, Error)]
pub enum AppError {
    /// Validation or parse failure; the message is sent to the client.
    #[error("{0}")]
    BadRequest(String),

    /// Missing item, malformed path, or empty store on a random pick.
    /// The detail is logged; the response body stays empty.
    #[error("{0}")]
    NotFound(String),

    /// Request body was not declared as JSON.
    #[error("Only json is supported")]
    UnsupportedMediaType,

    /// Basic-Auth credentials missing or wrong.
    #[error("Not authorized")]
    Unauthorized,

    /// Unexpected failure (body read, serialization); echoed as 500 text.
    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            AppError::BadRequest(message) => (StatusCode::BAD_REQUEST, message).into_response(),
            AppError::NotFound(detail) => {
                debug!(%detail, "not found");
                StatusCode::NOT_FOUND.into_response()
            }
            AppError::UnsupportedMediaType => {
                (StatusCode::UNSUPPORTED_MEDIA_TYPE, "Only json is supported").into_response()
            }
            AppError::Unauthorized => (StatusCode::UNAUTHORIZED, "Not authorized").into_response(),
            AppError::Internal(err) => {
                error!(error = %err, "internal error");
                (StatusCode::INTERNAL_SERVER_ERROR, err.to_string()).into_response()
            }
        }
    }
}
