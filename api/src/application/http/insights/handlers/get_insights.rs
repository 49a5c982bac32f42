use axum::extract::State;
use ecocanteen_core::domain::{
    insights::{
        ports::InsightService,
        value_objects::{ImpactMetrics, InsightsOverview},
    },
    waste_record::{entities::WasteRecord, value_objects::ReadStatus},
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::http::server::{
    api_entities::{api_error::ApiError, response::Response},
    app_state::AppState,
};

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct GetInsightsResponse {
    pub insights: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metrics: Option<ImpactMetrics>,
    pub raw_data: Vec<WasteRecord>,
    pub data_status: ReadStatus,
}

impl From<InsightsOverview> for GetInsightsResponse {
    fn from(overview: InsightsOverview) -> Self {
        Self {
            insights: overview.report.text_insights,
            metrics: overview.report.metrics,
            raw_data: overview.snapshot.records,
            data_status: overview.snapshot.status,
        }
    }
}

#[utoipa::path(
    get,
    path = "/insights",
    tag = "insights",
    summary = "Get waste insights",
    description = "Aggregates every record into waste percentage, diversion impact and suggestions for the latest record",
    responses(
        (status = 200, body = GetInsightsResponse),
        (status = 500, description = "A stored quantity is not numeric")
    )
)]
pub async fn get_insights(
    State(state): State<AppState>,
) -> Result<Response<GetInsightsResponse>, ApiError> {
    let overview = state.service.get_insights().await.map_err(|e| {
        tracing::error!("Failed to compute insights: {}", e);
        ApiError::InternalServerError(format!("Failed to compute insights: {}", e))
    })?;

    Ok(Response::OK(GetInsightsResponse::from(overview)))
}
