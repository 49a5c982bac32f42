use std::future::Future;

use crate::domain::health::entities::HealthStatus;

#[cfg_attr(test, mockall::automock)]
pub trait HealthCheckService: Send + Sync {
    fn health(&self) -> impl Future<Output = HealthStatus> + Send;
}
