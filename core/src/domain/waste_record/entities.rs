use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::{
    common::entities::app_errors::CoreError, waste_record::value_objects::parse_quantity,
};

/// Column order of the persisted record table.
pub const RECORD_FIELDS: [&str; 8] = [
    "date",
    "meal_type",
    "food_item",
    "produced_kg",
    "leftover_kg",
    "reason",
    "recorded_by",
    "diversion_type",
];

/// Recorder reported for rows stored without a `recorded_by` column.
pub const UNKNOWN_RECORDER: &str = "Unknown";

/// One row of the record table. Every field is kept exactly as submitted;
/// quantities are parsed on demand.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct WasteRecord {
    pub date: String,
    pub meal_type: String,
    pub food_item: String,
    pub produced_kg: String,
    pub leftover_kg: String,
    pub reason: String,
    pub recorded_by: String,
    pub diversion_type: String,
}

impl WasteRecord {
    /// Produced quantity in kilograms; a blank value counts as zero.
    pub fn produced_quantity(&self) -> Result<f64, CoreError> {
        optional_quantity("produced_kg", &self.produced_kg)
    }

    /// Leftover quantity in kilograms; a blank value counts as zero.
    pub fn leftover_quantity(&self) -> Result<f64, CoreError> {
        optional_quantity("leftover_kg", &self.leftover_kg)
    }

    pub fn is_diverted_as(&self, diversion: DiversionType) -> bool {
        self.diversion_type == diversion.as_str()
    }
}

fn optional_quantity(field: &str, raw: &str) -> Result<f64, CoreError> {
    if raw.trim().is_empty() {
        return Ok(0.0);
    }
    parse_quantity(field, raw)
}

/// Known dispositions of leftover food. The stored field stays free text;
/// these labels are matched exactly and case-sensitively.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DiversionType {
    Donated,
    Compost,
    AnimalFeed,
    #[default]
    Disposed,
}

impl DiversionType {
    pub fn as_str(&self) -> &'static str {
        match self {
            DiversionType::Donated => "Donated",
            DiversionType::Compost => "Compost",
            DiversionType::AnimalFeed => "Animal Feed",
            DiversionType::Disposed => "Disposed",
        }
    }
}
