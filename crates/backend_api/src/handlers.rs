use axum::{extract::rejection::JsonRejection, response::IntoResponse, Json};
use models::CalculationRequest;

use crate::{error::ApiError, Result};

/// POST /api/calculate
/// Runs the CapEx vs OpEx break-even analysis over the requested horizon
pub async fn calculate(
    payload: std::result::Result<Json<CalculationRequest>, JsonRejection>,
) -> Result<impl IntoResponse> {
    let Json(request) = payload.map_err(|rejection| {
        tracing::debug!("rejected calculation body: {}", rejection);
        ApiError::InvalidFormat
    })?;

    let result = breakeven_engine::compute_request(&request)?;

    Ok(Json(result))
}

/// GET /health
/// Health check endpoint
pub async fn health_check() -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "healthy",
        "service": "break-even-api"
    }))
}
