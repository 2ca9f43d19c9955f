pub mod gemini;

use crate::domain::error::Result;
use crate::domain::llm_config::LLMConfig;
use async_trait::async_trait;

pub use gemini::GeminiClient;

/// A text-generation provider. The API key travels with every call so that
/// clients never hold on to credentials.
#[async_trait]
pub trait LLMClient {
    async fn generate(
        &self,
        config: &LLMConfig,
        api_key: &str,
        system: &str,
        user: &str,
    ) -> Result<String>;
}
