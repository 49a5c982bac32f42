use serde::Deserialize;

use crate::domain::waste_record::entities::{DiversionType, UNKNOWN_RECORDER, WasteRecord};

/// A row as read back from the table. Columns missing from the file (an
/// older header, a short row) come back empty, except the recorder and the
/// diversion type which take their defaults. Present but blank values are
/// kept as they are.
#[derive(Debug, Clone, Deserialize)]
pub struct CsvWasteRecordRow {
    #[serde(default)]
    pub date: String,
    #[serde(default)]
    pub meal_type: String,
    #[serde(default)]
    pub food_item: String,
    #[serde(default)]
    pub produced_kg: String,
    #[serde(default)]
    pub leftover_kg: String,
    #[serde(default)]
    pub reason: String,
    #[serde(default = "default_recorded_by")]
    pub recorded_by: String,
    #[serde(default = "default_diversion_type")]
    pub diversion_type: String,
}

fn default_recorded_by() -> String {
    UNKNOWN_RECORDER.to_string()
}

fn default_diversion_type() -> String {
    DiversionType::default().as_str().to_string()
}

impl From<CsvWasteRecordRow> for WasteRecord {
    fn from(row: CsvWasteRecordRow) -> Self {
        Self {
            date: row.date,
            meal_type: row.meal_type,
            food_item: row.food_item,
            produced_kg: row.produced_kg,
            leftover_kg: row.leftover_kg,
            reason: row.reason,
            recorded_by: row.recorded_by,
            diversion_type: row.diversion_type,
        }
    }
}

/// Field values in table column order.
pub fn to_csv_fields(record: &WasteRecord) -> [&str; 8] {
    [
        record.date.as_str(),
        record.meal_type.as_str(),
        record.food_item.as_str(),
        record.produced_kg.as_str(),
        record.leftover_kg.as_str(),
        record.reason.as_str(),
        record.recorded_by.as_str(),
        record.diversion_type.as_str(),
    ]
}
