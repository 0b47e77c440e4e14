use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use climo_db::DbError;
use thiserror::Error;

/// Request-level failures. Every error is terminal for its request:
/// no retries, no partial results, no structured error body.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("invalid date {0:?}: expected MMDDYYYY")]
    InvalidDate(String),

    #[error(transparent)]
    Db(#[from] DbError),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::InvalidDate(_) => {
                (StatusCode::BAD_REQUEST, self.to_string()).into_response()
            }
            ApiError::Db(e) => {
                tracing::error!(error = %e, "data access failure");
                (StatusCode::INTERNAL_SERVER_ERROR, "internal server error").into_response()
            }
        }
    }
}
