use crate::application::use_cases::prompt_builder::{PromptBuilder, CONNECTION_PROBE};
use crate::domain::action::{ActionKind, ActionOutcome, ActionRequest, LanguagePair};
use crate::domain::llm_config::LLMConfig;
use crate::infrastructure::llm_clients::LLMClient;
use std::sync::Arc;
use tracing::{error, info, warn};

/// Turns action requests into provider calls and classifies what comes back.
///
/// Stateless apart from the client and endpoint settings: the API key is
/// supplied with every call and nothing is cached between calls.
pub struct ModelGateway {
    llm_client: Arc<dyn LLMClient + Send + Sync>,
    config: LLMConfig,
}

impl ModelGateway {
    pub fn new(llm_client: Arc<dyn LLMClient + Send + Sync>, config: LLMConfig) -> Self {
        Self { llm_client, config }
    }

    pub async fn execute(&self, request: &ActionRequest) -> ActionOutcome {
        if request.text.trim().is_empty() {
            return ActionOutcome::Empty;
        }
        if request.api_key.trim().is_empty() {
            return ActionOutcome::MissingApiKey;
        }

        let system_prompt = PromptBuilder::system_prompt(request.kind, request.languages.as_ref());
        let result = self
            .llm_client
            .generate(&self.config, &request.api_key, &system_prompt, &request.text)
            .await;

        match result {
            Ok(text) => {
                info!(request_id = %request.id, action = %request.kind, "Action completed");
                ActionOutcome::Completed(text)
            }
            Err(err) if err.is_credential_rejection() => {
                warn!(request_id = %request.id, action = %request.kind, error = %err, "Provider rejected the API key");
                ActionOutcome::InvalidApiKey
            }
            Err(err) => {
                error!(request_id = %request.id, action = %request.kind, error = %err, "Provider call failed");
                ActionOutcome::Failed
            }
        }
    }

    pub async fn translate(
        &self,
        text: &str,
        api_key: &str,
        source: &str,
        target: &str,
    ) -> ActionOutcome {
        let request = ActionRequest::translate(text, api_key, LanguagePair::new(source, target));
        self.execute(&request).await
    }

    pub async fn reformulate(&self, text: &str, api_key: &str) -> ActionOutcome {
        self.execute(&ActionRequest::new(ActionKind::Reformulate, text, api_key))
            .await
    }

    pub async fn correct(&self, text: &str, api_key: &str) -> ActionOutcome {
        self.execute(&ActionRequest::new(ActionKind::Correct, text, api_key))
            .await
    }

    pub async fn summarize(&self, text: &str, api_key: &str) -> ActionOutcome {
        self.execute(&ActionRequest::new(ActionKind::Summarize, text, api_key))
            .await
    }

    /// Sends a minimal prompt and reports whether the provider answered.
    pub async fn test_connection(&self, api_key: &str) -> bool {
        if api_key.trim().is_empty() {
            return false;
        }

        match self
            .llm_client
            .generate(&self.config, api_key, CONNECTION_PROBE, "")
            .await
        {
            Ok(_) => true,
            Err(err) => {
                warn!(error = %err, "Connection test failed");
                false
            }
        }
    }
}
