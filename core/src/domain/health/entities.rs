use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::waste_record::value_objects::ReadStatus;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct HealthStatus {
    pub hosted_model_enabled: bool,
    pub record_store: ReadStatus,
    pub record_count: usize,
}
