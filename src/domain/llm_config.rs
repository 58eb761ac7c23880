use serde::{Deserialize, Serialize};

pub const DEFAULT_GEMINI_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta/models";
pub const DEFAULT_GEMINI_MODEL: &str = "gemini-2.5-flash-preview-05-20";

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct LLMConfig {
    pub base_url: String,
    pub model: String,
    pub api_key: Option<String>,
    pub max_tokens: Option<u32>,
    pub temperature: Option<f32>,
    pub timeout_secs: u64,
}

impl Default for LLMConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_GEMINI_BASE_URL.to_string(),
            model: DEFAULT_GEMINI_MODEL.to_string(),
            api_key: None,
            max_tokens: Some(8192),
            temperature: Some(0.7),
            timeout_secs: 120,
        }
    }
}

impl LLMConfig {
    /// Copy of this config carrying a resolved key.
    pub fn with_api_key(&self, api_key: String) -> Self {
        Self {
            api_key: Some(api_key),
            ..self.clone()
        }
    }
}
