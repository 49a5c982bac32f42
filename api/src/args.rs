use std::path::PathBuf;

use clap::{ArgAction, Parser};
use ecocanteen_core::domain::common::{
    DEFAULT_WATSONX_MODEL, DEFAULT_WATSONX_URL, EcoCanteenConfig, LLMConfig, StorageConfig,
};

#[derive(Debug, Clone, Parser)]
#[command(name = "ecocanteen-api", version, about = "EcoCanteen food waste tracking API")]
pub struct Args {
    #[command(flatten)]
    pub server: ServerArgs,

    #[command(flatten)]
    pub storage: StorageArgs,

    #[command(flatten)]
    pub llm: LlmArgs,

    #[command(flatten)]
    pub log: LogArgs,
}

#[derive(Debug, Clone, clap::Args)]
pub struct ServerArgs {
    #[arg(long, env = "HOST", default_value = "0.0.0.0")]
    pub host: String,

    #[arg(long, env = "PORT", default_value_t = 5000)]
    pub port: u16,

    #[arg(
        long,
        env = "ALLOWED_ORIGINS",
        value_delimiter = ',',
        default_value = "http://localhost:5000"
    )]
    pub allowed_origins: Vec<String>,

    #[arg(long, env = "ROOT_PATH", default_value = "")]
    pub root_path: String,

    #[arg(long, env = "METRICS_ENABLED", default_value_t = true, action = ArgAction::Set)]
    pub metrics_enabled: bool,
}

#[derive(Debug, Clone, clap::Args)]
pub struct StorageArgs {
    #[arg(long, env = "DATA_DIR", default_value = "data")]
    pub data_dir: PathBuf,

    #[arg(long, env = "RECORDS_FILE", default_value = "waste_data.csv")]
    pub records_file: String,

    #[arg(long, env = "RECIPES_FILE", default_value = "recipes.json")]
    pub recipes_file: String,
}

#[derive(Debug, Clone, clap::Args)]
pub struct LlmArgs {
    #[arg(long, env = "WATSONX_API_KEY", hide_env_values = true)]
    pub watsonx_api_key: Option<String>,

    #[arg(long, env = "PROJECT_ID")]
    pub project_id: Option<String>,

    #[arg(long, env = "WATSONX_URL", default_value = DEFAULT_WATSONX_URL)]
    pub watsonx_url: String,

    #[arg(long, env = "WATSONX_MODEL", default_value = DEFAULT_WATSONX_MODEL)]
    pub watsonx_model: String,
}

#[derive(Debug, Clone, clap::Args)]
pub struct LogArgs {
    /// Used when RUST_LOG is not set
    #[arg(long, env = "LOG_FILTER", default_value = "info")]
    pub log_filter: String,

    #[arg(long, env = "LOG_JSON", default_value_t = false, action = ArgAction::Set)]
    pub log_json: bool,
}

impl From<Args> for EcoCanteenConfig {
    fn from(args: Args) -> Self {
        Self {
            storage: StorageConfig {
                records_path: args.storage.data_dir.join(&args.storage.records_file),
                recipes_path: args.storage.data_dir.join(&args.storage.recipes_file),
            },
            llm: LLMConfig::from_credentials(
                args.llm.watsonx_api_key,
                args.llm.project_id,
                args.llm.watsonx_url,
                args.llm.watsonx_model,
            ),
        }
    }
}
