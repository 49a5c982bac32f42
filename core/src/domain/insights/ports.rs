use std::future::Future;

use crate::domain::{
    common::entities::app_errors::CoreError, insights::value_objects::InsightsOverview,
};

/// Service trait for the insights dashboard
#[cfg_attr(test, mockall::automock)]
pub trait InsightService: Send + Sync {
    fn get_insights(&self) -> impl Future<Output = Result<InsightsOverview, CoreError>> + Send;
}
