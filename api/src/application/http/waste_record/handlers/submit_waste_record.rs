use axum::extract::State;
use ecocanteen_core::domain::{
    common::entities::app_errors::CoreError, waste_record::ports::WasteRecordService,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::http::{
    server::{
        api_entities::{
            api_error::{ApiError, ValidateJson},
            response::Response,
        },
        app_state::AppState,
    },
    waste_record::validators::SubmitWasteRecordRequest,
};

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct SubmitWasteRecordResponse {
    pub status: String,
    pub message: String,
}

#[utoipa::path(
    post,
    path = "/submit-data",
    tag = "waste-records",
    summary = "Submit a waste record",
    description = "Appends one production/leftover record to the record table",
    request_body = SubmitWasteRecordRequest,
    responses(
        (status = 200, body = SubmitWasteRecordResponse),
        (status = 400, description = "Quantities are not numeric"),
        (status = 500, description = "The record could not be saved")
    )
)]
pub async fn submit_waste_record(
    State(state): State<AppState>,
    ValidateJson(payload): ValidateJson<SubmitWasteRecordRequest>,
) -> Result<Response<SubmitWasteRecordResponse>, ApiError> {
    state
        .service
        .submit_waste_record(payload.into())
        .await
        .map_err(|e| match e {
            CoreError::StorageError(_) => {
                tracing::error!("Failed to save waste record: {}", e);
                ApiError::InternalServerError("Failed to save data".to_string())
            }
            e => ApiError::from(e),
        })?;

    Ok(Response::OK(SubmitWasteRecordResponse {
        status: "success".to_string(),
        message: "Data saved successfully".to_string(),
    }))
}
