use crate::domain::{
    chat::ports::LLMClient, recipe::ports::RecipeCatalog,
    waste_record::ports::WasteRecordRepository,
};

/// Application service bundling every port the domain services need.
///
/// The hosted model is optional: when `llm_client` is `None` the chat
/// dispatcher answers from the intent classifier alone.
#[derive(Clone)]
pub struct Service<WR, RC, LLM>
where
    WR: WasteRecordRepository,
    RC: RecipeCatalog,
    LLM: LLMClient,
{
    pub(crate) waste_record_repository: WR,
    pub(crate) recipe_catalog: RC,
    pub(crate) llm_client: Option<LLM>,
}

impl<WR, RC, LLM> Service<WR, RC, LLM>
where
    WR: WasteRecordRepository,
    RC: RecipeCatalog,
    LLM: LLMClient,
{
    pub fn new(waste_record_repository: WR, recipe_catalog: RC, llm_client: Option<LLM>) -> Self {
        Self {
            waste_record_repository,
            recipe_catalog,
            llm_client,
        }
    }

    pub fn is_hosted_model_enabled(&self) -> bool {
        self.llm_client.is_some()
    }
}
