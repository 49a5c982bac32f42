use axum::extract::State;
use ecocanteen_core::domain::waste_record::{
    entities::WasteRecord, ports::WasteRecordService, value_objects::ReadStatus,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::http::server::{
    api_entities::{api_error::ApiError, response::Response},
    app_state::AppState,
};

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct GetWasteRecordsResponse {
    pub data: Vec<WasteRecord>,
    pub data_status: ReadStatus,
}

#[utoipa::path(
    get,
    path = "/waste-records",
    tag = "waste-records",
    summary = "List waste records",
    description = "Returns every record in submission order. A table that cannot be read yields no records and a read_failed status",
    responses(
        (status = 200, body = GetWasteRecordsResponse)
    )
)]
pub async fn get_waste_records(
    State(state): State<AppState>,
) -> Result<Response<GetWasteRecordsResponse>, ApiError> {
    let snapshot = state.service.get_waste_records().await;

    Ok(Response::OK(GetWasteRecordsResponse {
        data: snapshot.records,
        data_status: snapshot.status,
    }))
}
