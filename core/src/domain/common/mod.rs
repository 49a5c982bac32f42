use std::path::PathBuf;

use chrono::{DateTime, Utc};
use uuid::{NoContext, Timestamp, Uuid};

pub mod entities;
pub mod services;

pub const DEFAULT_WATSONX_URL: &str = "https://us-south.ml.cloud.ibm.com";
pub const DEFAULT_WATSONX_MODEL: &str = "ibm/granite-13b-chat-v2";

#[derive(Clone, Debug)]
pub struct EcoCanteenConfig {
    pub storage: StorageConfig,
    pub llm: LLMConfig,
}

#[derive(Clone, Debug)]
pub struct StorageConfig {
    pub records_path: PathBuf,
    pub recipes_path: PathBuf,
}

#[derive(Clone, Debug, Default)]
pub struct LLMConfig {
    /// `None` disables the hosted model; chat then always uses the intent classifier.
    pub hosted_model: Option<HostedModelConfig>,
}

impl LLMConfig {
    /// Builds the config from optional credentials. The hosted model is only
    /// enabled when both the API key and the project id are non-blank.
    pub fn from_credentials(
        api_key: Option<String>,
        project_id: Option<String>,
        url: String,
        model_id: String,
    ) -> Self {
        let non_blank = |value: Option<String>| value.filter(|v| !v.trim().is_empty());

        let hosted_model = match (non_blank(api_key), non_blank(project_id)) {
            (Some(api_key), Some(project_id)) => Some(HostedModelConfig {
                url,
                api_key,
                project_id,
                model_id,
                parameters: GenerationParameters::default(),
            }),
            _ => None,
        };

        Self { hosted_model }
    }

    pub fn is_hosted_model_enabled(&self) -> bool {
        self.hosted_model.is_some()
    }
}

#[derive(Clone, Debug)]
pub struct HostedModelConfig {
    pub url: String,
    pub api_key: String,
    pub project_id: String,
    pub model_id: String,
    pub parameters: GenerationParameters,
}

#[derive(Clone, Debug, PartialEq)]
pub struct GenerationParameters {
    pub decoding_method: String,
    pub max_new_tokens: u32,
    pub min_new_tokens: u32,
    pub temperature: f64,
    pub top_k: u32,
    pub top_p: f64,
}

impl Default for GenerationParameters {
    fn default() -> Self {
        Self {
            decoding_method: "greedy".to_string(),
            max_new_tokens: 100,
            min_new_tokens: 1,
            temperature: 0.7,
            top_k: 50,
            top_p: 1.0,
        }
    }
}

pub fn generate_timestamp() -> (DateTime<Utc>, Timestamp) {
    let now = Utc::now();
    let seconds = now.timestamp().try_into().unwrap_or(0);
    let timestamp = Timestamp::from_unix(NoContext, seconds, 0);

    (now, timestamp)
}

pub fn generate_uuid_v7() -> Uuid {
    let (_, timestamp) = generate_timestamp();
    Uuid::new_v7(timestamp)
}
