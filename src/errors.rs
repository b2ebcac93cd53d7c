use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;
use tracing::error;

/// Domain error taxonomy. Each variant maps to a fixed status and a short
/// machine-checkable message; clients assert against the literal strings.
#[derive(Debug, Error)]
pub enum ApiError {
    /// No bearer credential, or one that does not resolve to a known user.
    /// Absence and invalidity are the same condition.
    #[error("token invalid")]
    Unauthenticated,
    /// Authenticated, but not the owner of the resource.
    #[error("unauthorized access")]
    Unauthorized,
    #[error("invalid username or password")]
    InvalidCredentials,
    #[error("{0}")]
    NotFound(&'static str),
    #[error("{0}")]
    InvalidInput(String),
    /// Unexpected fault (hashing, token encoding). Never surfaced as one of
    /// the domain kinds above; the detail is logged, not leaked.
    #[error("internal server error")]
    Internal(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self {
            ApiError::Unauthenticated => StatusCode::UNAUTHORIZED,
            ApiError::Unauthorized => StatusCode::UNAUTHORIZED,
            ApiError::InvalidCredentials => StatusCode::UNAUTHORIZED,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::InvalidInput(_) => StatusCode::BAD_REQUEST,
            ApiError::Internal(detail) => {
                error!("Internal error: {}", detail);
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };

        (
            status,
            Json(serde_json::json!({
              "error": self.to_string()
            })),
        )
            .into_response()
    }
}
