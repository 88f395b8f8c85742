use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;

/// The two failure shapes this surface exposes: a session-guard rejection
/// and the generic store fault. The underlying cause of a fault is logged
/// and never sent to the caller.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("unauthorized")]
    Unauthorized,
    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::Unauthorized => (
                StatusCode::UNAUTHORIZED,
                axum::Json(serde_json::json!({ "message": "Unauthorized" })),
            )
                .into_response(),
            ApiError::Internal(err) => {
                tracing::error!(error = ?err, "store operation failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    axum::Json(serde_json::json!({ "message": "Something went wrong" })),
                )
                    .into_response()
            }
        }
    }
}
