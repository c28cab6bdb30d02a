use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use breakeven_engine::EngineError;
use serde_json::json;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, ApiError>;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Invalid input values")]
    InvalidValues(#[from] EngineError),

    #[error("Invalid input format")]
    InvalidFormat,

    #[error("Internal server error: {0}")]
    Internal(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error_message) = match self {
            ApiError::InvalidValues(_) => (StatusCode::BAD_REQUEST, self.to_string()),
            ApiError::InvalidFormat => (StatusCode::BAD_REQUEST, self.to_string()),
            ApiError::Internal(ref detail) => {
                // The detail stays in the server log; clients get a fixed body
                tracing::error!("internal error: {}", detail);
                (StatusCode::INTERNAL_SERVER_ERROR, "Server error".to_string())
            }
        };

        let body = Json(json!({
            "error": error_message,
        }));

        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;

    async fn status_and_body(err: ApiError) -> (StatusCode, serde_json::Value) {
        let response = err.into_response();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn test_range_failure_maps_to_client_error() {
        let (status, body) = status_and_body(EngineError::InvalidValues.into()).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body, json!({ "error": "Invalid input values" }));
    }

    #[tokio::test]
    async fn test_format_failure_maps_to_client_error() {
        let (status, body) = status_and_body(ApiError::InvalidFormat).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body, json!({ "error": "Invalid input format" }));
    }

    #[tokio::test]
    async fn test_internal_failure_hides_detail() {
        let (status, body) =
            status_and_body(ApiError::Internal("arithmetic blew up".to_string())).await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body, json!({ "error": "Server error" }));
    }
}
