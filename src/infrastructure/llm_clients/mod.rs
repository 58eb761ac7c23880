pub mod gemini;

use crate::domain::error::Result;
use crate::domain::llm_config::LLMConfig;
use async_trait::async_trait;

pub use gemini::GeminiClient;

#[async_trait]
pub trait LLMClient {
    async fn generate(&self, config: &LLMConfig, system: &str, user: &str) -> Result<String>;
}
