use std::env;

use crate::error::AppResult;

pub const DEFAULT_GEMINI_MODEL: &str = "gemini-1.5-flash";
pub const DEFAULT_BIND_ADDRESS: &str = "0.0.0.0:8000";

/// Process-wide configuration, read once at startup and immutable after.
/// Missing credentials are not fatal here: the process starts, warns, and
/// the affected client reports a configuration error at call time.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub supabase_url: Option<String>,
    pub supabase_service_key: Option<String>,
    pub gemini_api_key: Option<String>,
    pub gemini_model: String,
    pub bind_address: String,
}

impl AppConfig {
    pub fn load() -> AppResult<Self> {
        let gemini_model =
            env::var("GEMINI_MODEL").unwrap_or_else(|_| DEFAULT_GEMINI_MODEL.to_string());

        Ok(Self {
            supabase_url: env::var("SUPABASE_URL").ok(),
            supabase_service_key: env::var("SUPABASE_SERVICE_KEY").ok(),
            gemini_api_key: env::var("GEMINI_API_KEY").ok(),
            gemini_model,
            bind_address: DEFAULT_BIND_ADDRESS.to_string(),
        })
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            supabase_url: None,
            supabase_service_key: None,
            gemini_api_key: None,
            gemini_model: DEFAULT_GEMINI_MODEL.to_string(),
            bind_address: DEFAULT_BIND_ADDRESS.to_string(),
        }
    }
}
