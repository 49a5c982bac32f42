use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::domain::{
    chat::ports::LLMClient,
    common::{GenerationParameters, HostedModelConfig, entities::app_errors::CoreError},
};

const IAM_TOKEN_URL: &str = "https://iam.cloud.ibm.com/identity/token";
const API_VERSION: &str = "2023-05-29";

#[derive(Debug, Clone)]
pub struct WatsonxLLMClient {
    config: HostedModelConfig,
    iam_url: String,
    client: Client,
}

#[derive(Debug, Deserialize)]
struct IamTokenResponse {
    access_token: String,
}

#[derive(Debug, Serialize)]
struct GenerationRequest<'a> {
    input: String,
    model_id: &'a str,
    project_id: &'a str,
    parameters: RequestParameters<'a>,
}

#[derive(Debug, Serialize)]
struct RequestParameters<'a> {
    decoding_method: &'a str,
    max_new_tokens: u32,
    min_new_tokens: u32,
    temperature: f64,
    top_k: u32,
    top_p: f64,
}

impl<'a> From<&'a GenerationParameters> for RequestParameters<'a> {
    fn from(parameters: &'a GenerationParameters) -> Self {
        Self {
            decoding_method: &parameters.decoding_method,
            max_new_tokens: parameters.max_new_tokens,
            min_new_tokens: parameters.min_new_tokens,
            temperature: parameters.temperature,
            top_k: parameters.top_k,
            top_p: parameters.top_p,
        }
    }
}

#[derive(Debug, Deserialize)]
struct GenerationResponse {
    results: Vec<GenerationResult>,
}

#[derive(Debug, Deserialize)]
struct GenerationResult {
    generated_text: String,
}

impl WatsonxLLMClient {
    pub fn new(config: HostedModelConfig) -> Self {
        Self {
            config,
            iam_url: IAM_TOKEN_URL.to_string(),
            client: Client::new(),
        }
    }

    pub fn model_id(&self) -> &str {
        &self.config.model_id
    }

    fn generation_url(&self) -> String {
        format!(
            "{}/ml/v1/text/generation?version={}",
            self.config.url.trim_end_matches('/'),
            API_VERSION
        )
    }

    async fn request_access_token(&self) -> Result<String, CoreError> {
        let response = self
            .client
            .post(&self.iam_url)
            .form(&[
                ("grant_type", "urn:ibm:params:oauth:grant-type:apikey"),
                ("apikey", self.config.api_key.as_str()),
            ])
            .send()
            .await
            .map_err(|e| {
                tracing::error!("IAM token request failed: {}", e);
                CoreError::ExternalServiceError(format!("IAM token error: {}", e))
            })?;

        if !response.status().is_success() {
            let status = response.status();
            tracing::error!("IAM token request rejected: {}", status);
            return Err(CoreError::ExternalServiceError(format!(
                "IAM token request returned: {}",
                status
            )));
        }

        let token: IamTokenResponse = response.json().await.map_err(|e| {
            tracing::error!("Failed to parse IAM token response: {}", e);
            CoreError::ExternalServiceError(format!("Failed to parse IAM token: {}", e))
        })?;

        Ok(token.access_token)
    }

    async fn call_generation_api(&self, prompt: String) -> Result<String, CoreError> {
        let access_token = self.request_access_token().await?;

        let request = GenerationRequest {
            input: prompt,
            model_id: &self.config.model_id,
            project_id: &self.config.project_id,
            parameters: RequestParameters::from(&self.config.parameters),
        };

        let response = self
            .client
            .post(self.generation_url())
            .bearer_auth(access_token)
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                tracing::error!("watsonx request failed: {}", e);
                CoreError::ExternalServiceError(format!("LLM API error: {}", e))
            })?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_default();
            tracing::error!("watsonx API error: {} - {}", status, error_text);
            return Err(CoreError::ExternalServiceError(format!(
                "LLM API returned error: {} - {}",
                status, error_text
            )));
        }

        let generation: GenerationResponse = response.json().await.map_err(|e| {
            tracing::error!("Failed to parse watsonx response: {}", e);
            CoreError::ExternalServiceError(format!("Failed to parse LLM response: {}", e))
        })?;

        generation
            .results
            .into_iter()
            .next()
            .map(|r| r.generated_text)
            .ok_or_else(|| CoreError::ExternalServiceError("No response from LLM".to_string()))
    }
}

impl LLMClient for WatsonxLLMClient {
    async fn generate_text(&self, prompt: String) -> Result<String, CoreError> {
        self.call_generation_api(prompt).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::common::{DEFAULT_WATSONX_MODEL, DEFAULT_WATSONX_URL};

    fn config(url: &str) -> HostedModelConfig {
        HostedModelConfig {
            url: url.to_string(),
            api_key: "key".to_string(),
            project_id: "project".to_string(),
            model_id: DEFAULT_WATSONX_MODEL.to_string(),
            parameters: GenerationParameters::default(),
        }
    }

    #[test]
    fn test_generation_url() {
        let client = WatsonxLLMClient::new(config(&format!("{}/", DEFAULT_WATSONX_URL)));
        assert_eq!(
            client.generation_url(),
            "https://us-south.ml.cloud.ibm.com/ml/v1/text/generation?version=2023-05-29"
        );
    }

    #[test]
    fn test_request_body_shape() {
        let config = config(DEFAULT_WATSONX_URL);
        let request = GenerationRequest {
            input: "User: hi".to_string(),
            model_id: &config.model_id,
            project_id: &config.project_id,
            parameters: RequestParameters::from(&config.parameters),
        };

        let body = serde_json::to_value(&request).unwrap();
        assert_eq!(body["model_id"], "ibm/granite-13b-chat-v2");
        assert_eq!(body["project_id"], "project");
        assert_eq!(body["parameters"]["decoding_method"], "greedy");
        assert_eq!(body["parameters"]["max_new_tokens"], 100);
        assert_eq!(body["parameters"]["top_k"], 50);
    }

    #[tokio::test]
    async fn test_unreachable_service_is_an_error() {
        let mut client = WatsonxLLMClient::new(config("http://127.0.0.1:9"));
        client.iam_url = "http://127.0.0.1:9/identity/token".to_string();

        let result = client.generate_text("hello".to_string()).await;
        assert!(matches!(result, Err(CoreError::ExternalServiceError(_))));
    }
}
