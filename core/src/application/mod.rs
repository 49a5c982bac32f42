use tracing::info;

use crate::{
    domain::common::{EcoCanteenConfig, services::Service},
    infrastructure::{
        llm::WatsonxLLMClient, recipe::JsonRecipeCatalog, waste_record::CsvWasteRecordRepository,
    },
};

pub type EcoCanteenService = Service<CsvWasteRecordRepository, JsonRecipeCatalog, WatsonxLLMClient>;

/// Wires the file-backed adapters and, when configured, the hosted model.
pub fn create_service(config: EcoCanteenConfig) -> Result<EcoCanteenService, anyhow::Error> {
    let waste_record_repository = CsvWasteRecordRepository::new(&config.storage.records_path);
    waste_record_repository.init()?;

    let recipe_catalog = JsonRecipeCatalog::load(&config.storage.recipes_path);

    let llm_client = config.llm.hosted_model.map(WatsonxLLMClient::new);
    match &llm_client {
        Some(client) => info!(model_id = client.model_id(), "hosted model enabled"),
        None => info!("hosted model not configured, chat uses the intent classifier"),
    }

    Ok(Service::new(
        waste_record_repository,
        recipe_catalog,
        llm_client,
    ))
}
