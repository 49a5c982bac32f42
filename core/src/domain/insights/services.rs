use tracing::{instrument, warn};

use crate::domain::{
    chat::ports::LLMClient,
    common::{entities::app_errors::CoreError, services::Service},
    insights::{
        ports::InsightService,
        value_objects::{
            CO2_KG_PER_DIVERTED_KG, ImpactMetrics, InsightReport, InsightsOverview, KG_PER_MEAL,
        },
    },
    leftover::advise,
    recipe::ports::RecipeCatalog,
    waste_record::{
        entities::{DiversionType, WasteRecord},
        ports::WasteRecordRepository,
    },
};

/// Aggregates the full record list into insight strings and impact metrics.
///
/// The "Key Opportunity" and latest-recorder insights describe the last
/// record in submission order, not the worst offender.
pub fn summarize<RC>(records: &[WasteRecord], catalog: &RC) -> Result<InsightReport, CoreError>
where
    RC: RecipeCatalog + ?Sized,
{
    let Some(latest) = records.last() else {
        return Ok(InsightReport::not_enough_data());
    };

    let mut total_produced = 0.0;
    let mut total_leftover = 0.0;
    let mut donated_kg = 0.0;
    let mut composted_kg = 0.0;
    let mut animal_feed_kg = 0.0;

    for record in records {
        let leftover = record.leftover_quantity()?;
        total_produced += record.produced_quantity()?;
        total_leftover += leftover;

        if record.is_diverted_as(DiversionType::Donated) {
            donated_kg += leftover;
        } else if record.is_diverted_as(DiversionType::Compost) {
            composted_kg += leftover;
        } else if record.is_diverted_as(DiversionType::AnimalFeed) {
            animal_feed_kg += leftover;
        }
    }

    let waste_percentage = if total_produced > 0.0 {
        total_leftover / total_produced * 100.0
    } else {
        0.0
    };

    let meals_saved = (donated_kg / KG_PER_MEAL).floor() as u64;
    let co2_saved = (donated_kg + composted_kg) * CO2_KG_PER_DIVERTED_KG;

    let key_opportunity = advise(catalog, &latest.food_item, latest.leftover_quantity()?);

    let text_insights = vec![
        format!("Average waste percentage: {waste_percentage:.1}%."),
        format!("Key Opportunity: {key_opportunity}"),
        format!(
            "Staff '{}' recorded the latest efficiency check.",
            latest.recorded_by
        ),
        format!("Impact: {meals_saved} meals saved via donation."),
        format!("Environment: prevented {co2_saved:.1}kg of CO2 emissions."),
    ];

    Ok(InsightReport {
        text_insights,
        metrics: Some(ImpactMetrics {
            meals_saved,
            co2_saved,
            donated_kg,
            composted_kg,
            animal_feed_kg,
            waste_percentage,
        }),
    })
}

impl<WR, RC, LLM> InsightService for Service<WR, RC, LLM>
where
    WR: WasteRecordRepository,
    RC: RecipeCatalog,
    LLM: LLMClient,
{
    #[instrument(skip(self))]
    async fn get_insights(&self) -> Result<InsightsOverview, CoreError> {
        let snapshot = self.waste_record_repository.read_all().await;

        if snapshot.is_read_failure() {
            warn!("Computing insights without records: {:?}", snapshot.status);
        }

        let report = summarize(&snapshot.records, &self.recipe_catalog)?;

        Ok(InsightsOverview { report, snapshot })
    }
}
