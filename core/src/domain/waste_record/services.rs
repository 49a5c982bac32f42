use tracing::instrument;

use crate::domain::{
    chat::ports::LLMClient,
    common::{entities::app_errors::CoreError, services::Service},
    recipe::ports::RecipeCatalog,
    waste_record::{
        entities::WasteRecord,
        ports::{WasteRecordRepository, WasteRecordService},
        value_objects::{RecordsSnapshot, SubmitWasteRecordInput, parse_quantity},
    },
};

impl<WR, RC, LLM> WasteRecordService for Service<WR, RC, LLM>
where
    WR: WasteRecordRepository,
    RC: RecipeCatalog,
    LLM: LLMClient,
{
    #[instrument(skip(self, input), fields(food_item = %input.food_item))]
    async fn submit_waste_record(
        &self,
        input: SubmitWasteRecordInput,
    ) -> Result<WasteRecord, CoreError> {
        // Quantities stay strings in storage but must be numeric on the way in.
        parse_quantity("produced_kg", &input.produced_kg)?;
        parse_quantity("leftover_kg", &input.leftover_kg)?;

        let record = WasteRecord::from(input);
        self.waste_record_repository.append(record.clone()).await?;

        tracing::info!(
            diversion_type = %record.diversion_type,
            "waste record submitted"
        );

        Ok(record)
    }

    async fn get_waste_records(&self) -> RecordsSnapshot {
        self.waste_record_repository.read_all().await
    }
}
