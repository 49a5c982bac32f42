use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::waste_record::value_objects::RecordsSnapshot;

/// Assumed weight of one meal, in kilograms.
pub const KG_PER_MEAL: f64 = 0.4;
/// CO2-equivalent kept out of landfill per diverted kilogram.
pub const CO2_KG_PER_DIVERTED_KG: f64 = 2.5;

pub const NOT_ENOUGH_DATA: &str = "Not enough data for analysis. Please input daily records.";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ImpactMetrics {
    pub meals_saved: u64,
    pub co2_saved: f64,
    pub donated_kg: f64,
    pub composted_kg: f64,
    pub animal_feed_kg: f64,
    pub waste_percentage: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct InsightReport {
    pub text_insights: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metrics: Option<ImpactMetrics>,
}

impl InsightReport {
    pub fn not_enough_data() -> Self {
        Self {
            text_insights: vec![NOT_ENOUGH_DATA.to_string()],
            metrics: None,
        }
    }
}

/// Insights together with the records they were computed from.
#[derive(Debug, Clone, PartialEq)]
pub struct InsightsOverview {
    pub report: InsightReport,
    pub snapshot: RecordsSnapshot,
}
