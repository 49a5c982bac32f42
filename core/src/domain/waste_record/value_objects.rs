use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::{
    common::entities::app_errors::CoreError,
    waste_record::entities::{DiversionType, WasteRecord},
};

#[derive(Debug, Clone, Default)]
pub struct SubmitWasteRecordInput {
    pub date: String,
    pub meal_type: String,
    pub food_item: String,
    pub produced_kg: String,
    pub leftover_kg: String,
    pub reason: String,
    pub recorded_by: String,
    pub diversion_type: Option<String>,
}

impl From<SubmitWasteRecordInput> for WasteRecord {
    fn from(input: SubmitWasteRecordInput) -> Self {
        let diversion_type = input
            .diversion_type
            .filter(|d| !d.trim().is_empty())
            .unwrap_or_else(|| DiversionType::default().as_str().to_string());

        Self {
            date: input.date,
            meal_type: input.meal_type,
            food_item: input.food_item,
            produced_kg: input.produced_kg,
            leftover_kg: input.leftover_kg,
            reason: input.reason,
            recorded_by: input.recorded_by,
            diversion_type,
        }
    }
}

/// Outcome of a full read of the record table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum ReadStatus {
    Loaded,
    Empty,
    ReadFailed { reason: String },
}

#[derive(Debug, Clone, PartialEq)]
pub struct RecordsSnapshot {
    pub records: Vec<WasteRecord>,
    pub status: ReadStatus,
}

impl RecordsSnapshot {
    pub fn loaded(records: Vec<WasteRecord>) -> Self {
        let status = if records.is_empty() {
            ReadStatus::Empty
        } else {
            ReadStatus::Loaded
        };
        Self { records, status }
    }

    pub fn failed(reason: impl Into<String>) -> Self {
        Self {
            records: Vec::new(),
            status: ReadStatus::ReadFailed {
                reason: reason.into(),
            },
        }
    }

    pub fn is_read_failure(&self) -> bool {
        matches!(self.status, ReadStatus::ReadFailed { .. })
    }
}

/// Parses a kilogram quantity the way a decimal literal is read: surrounding
/// whitespace is ignored, anything non-finite or non-numeric is rejected.
pub fn parse_quantity(field: &str, raw: &str) -> Result<f64, CoreError> {
    raw.trim()
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
        .ok_or_else(|| CoreError::InvalidQuantity {
            field: field.to_string(),
            value: raw.to_string(),
        })
}
