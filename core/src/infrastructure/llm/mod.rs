pub mod watsonx_client;

pub use watsonx_client::WatsonxLLMClient;
