use ecocanteen_core::domain::waste_record::{
    value_objects::SubmitWasteRecordInput, value_objects::parse_quantity,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::{Validate, ValidationError};

/// A quantity sent either as a JSON number or as a numeric string.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum QuantityInput {
    Number(serde_json::Number),
    Text(String),
}

impl QuantityInput {
    pub fn as_stored(&self) -> String {
        match self {
            QuantityInput::Number(n) => n.to_string(),
            QuantityInput::Text(s) => s.clone(),
        }
    }
}

fn validate_quantity(value: &QuantityInput) -> Result<(), ValidationError> {
    parse_quantity("quantity", &value.as_stored())
        .map(|_| ())
        .map_err(|_| ValidationError::new("numeric").with_message("must be a number".into()))
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, Validate)]
pub struct SubmitWasteRecordRequest {
    #[serde(default)]
    pub date: String,
    #[serde(default)]
    pub meal_type: String,
    #[serde(default)]
    pub food_item: String,
    #[schema(value_type = String, example = "25.5")]
    #[validate(custom(function = "validate_quantity"))]
    pub produced_kg: QuantityInput,
    #[schema(value_type = String, example = "4.0")]
    #[validate(custom(function = "validate_quantity"))]
    pub leftover_kg: QuantityInput,
    #[serde(default)]
    pub reason: String,
    #[serde(default)]
    pub recorded_by: String,
    #[schema(example = "Donated")]
    pub diversion_type: Option<String>,
}

impl From<SubmitWasteRecordRequest> for SubmitWasteRecordInput {
    fn from(request: SubmitWasteRecordRequest) -> Self {
        Self {
            date: request.date,
            meal_type: request.meal_type,
            food_item: request.food_item,
            produced_kg: request.produced_kg.as_stored(),
            leftover_kg: request.leftover_kg.as_stored(),
            reason: request.reason,
            recorded_by: request.recorded_by,
            diversion_type: request.diversion_type,
        }
    }
}
