//! Application configuration. Paths and text-generation settings.

use serde::Deserialize;

pub const DEFAULT_AI_API_URL: &str = "https://api.openai.com/v1/chat/completions";
pub const DEFAULT_AI_MODEL: &str = "gpt-4o-mini";

#[derive(Debug, Deserialize, Default)]
pub struct AppConfig {
    /// Directory holding the saved course record. Read from COURSE_FORGE_DATA_DIR.
    #[serde(default)]
    pub data_dir: Option<String>,

    /// Directory generated documents are written to. Read from COURSE_FORGE_OUTPUT_DIR.
    #[serde(default)]
    pub output_dir: Option<String>,

    // ─────────────────────────────────────────────────────────────────────────
    // Text Generation Configuration
    // ─────────────────────────────────────────────────────────────────────────
    /// API key for the OpenAI-compatible endpoint. Read from COURSE_FORGE_AI_API_KEY.
    #[serde(default)]
    pub ai_api_key: Option<String>,

    /// Chat-completions URL. Defaults to OpenAI. Read from COURSE_FORGE_AI_API_URL.
    #[serde(default)]
    pub ai_api_url: Option<String>,

    /// Model name. Defaults to "gpt-4o-mini". Read from COURSE_FORGE_AI_MODEL.
    #[serde(default)]
    pub ai_model: Option<String>,

    /// Sampling temperature. Read from COURSE_FORGE_AI_TEMPERATURE.
    #[serde(default)]
    pub ai_temperature: Option<f32>,
}

impl AppConfig {
    pub fn load() -> Result<Self, config::ConfigError> {
        dotenv::dotenv().ok();
        let mut c = config::Config::builder();
        c = c.add_source(config::Environment::with_prefix("COURSE_FORGE").try_parsing(true));
        if let Ok(path) = std::env::var("COURSE_FORGE_CONFIG") {
            c = c.add_source(config::File::with_name(&path));
        }
        c.build()?.try_deserialize()
    }

    pub fn data_dir_or_default(&self) -> String {
        self.data_dir.clone().unwrap_or_else(|| "./data".to_string())
    }

    pub fn output_dir_or_default(&self) -> String {
        self.output_dir
            .clone()
            .unwrap_or_else(|| "./output".to_string())
    }

    /// Returns the API key if configured. Reads from config or COURSE_FORGE_AI_API_KEY env.
    pub fn ai_api_key(&self) -> Option<String> {
        self.ai_api_key
            .clone()
            .or_else(|| std::env::var("COURSE_FORGE_AI_API_KEY").ok())
            .filter(|k| !k.trim().is_empty())
    }

    pub fn ai_api_url_or_default(&self) -> String {
        self.ai_api_url
            .clone()
            .unwrap_or_else(|| DEFAULT_AI_API_URL.to_string())
    }

    pub fn ai_model_or_default(&self) -> String {
        self.ai_model
            .clone()
            .unwrap_or_else(|| DEFAULT_AI_MODEL.to_string())
    }

    /// Defaults to 0.7; clamped to the API's accepted range.
    pub fn ai_temperature_or_default(&self) -> f32 {
        self.ai_temperature.unwrap_or(0.7).clamp(0.0, 2.0)
    }

    /// Returns true if text generation is configured (API key present).
    pub fn is_ai_configured(&self) -> bool {
        self.ai_api_key().is_some()
    }
}
