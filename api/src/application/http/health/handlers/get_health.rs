use axum::extract::State;
use ecocanteen_core::domain::{
    health::ports::HealthCheckService, waste_record::value_objects::ReadStatus,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::http::server::{
    api_entities::{api_error::ApiError, response::Response},
    app_state::AppState,
};

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct HealthResponse {
    pub status: String,
    pub hosted_model_enabled: bool,
    pub record_store: ReadStatus,
    pub record_count: usize,
}

#[utoipa::path(
    get,
    path = "/health",
    tag = "health",
    summary = "Service health",
    responses(
        (status = 200, body = HealthResponse)
    )
)]
pub async fn get_health(
    State(state): State<AppState>,
) -> Result<Response<HealthResponse>, ApiError> {
    let health = state.service.health().await;

    let status = match health.record_store {
        ReadStatus::ReadFailed { .. } => "degraded",
        _ => "ok",
    };

    Ok(Response::OK(HealthResponse {
        status: status.to_string(),
        hosted_model_enabled: health.hosted_model_enabled,
        record_store: health.record_store,
        record_count: health.record_count,
    }))
}
