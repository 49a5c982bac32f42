use crate::domain::{
    chat::ports::LLMClient,
    common::services::Service,
    health::{entities::HealthStatus, ports::HealthCheckService},
    recipe::ports::RecipeCatalog,
    waste_record::ports::WasteRecordRepository,
};

impl<WR, RC, LLM> HealthCheckService for Service<WR, RC, LLM>
where
    WR: WasteRecordRepository,
    RC: RecipeCatalog,
    LLM: LLMClient,
{
    async fn health(&self) -> HealthStatus {
        let snapshot = self.waste_record_repository.read_all().await;

        HealthStatus {
            hosted_model_enabled: self.is_hosted_model_enabled(),
            record_store: snapshot.status,
            record_count: snapshot.records.len(),
        }
    }
}
