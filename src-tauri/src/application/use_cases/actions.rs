use crate::application::use_cases::model_gateway::ModelGateway;
use crate::domain::action::{ActionKind, ActionReply, ActionRequest, RequestId};
use crate::infrastructure::settings_store::SettingsStore;
use std::sync::Arc;

/// Runs panel actions with the key and languages configured at call time,
/// and renders the outcome in the UI language.
pub struct ActionUseCase {
    gateway: ModelGateway,
    store: Arc<SettingsStore>,
}

impl ActionUseCase {
    pub fn new(gateway: ModelGateway, store: Arc<SettingsStore>) -> Self {
        Self { gateway, store }
    }

    pub async fn execute(&self, kind: ActionKind, text: String, id: RequestId) -> ActionReply {
        let api_key = self.store.api_key();
        let request = match kind {
            ActionKind::Translate => ActionRequest::translate(text, api_key, self.store.languages()),
            _ => ActionRequest::new(kind, text, api_key),
        }
        .with_id(id);

        let outcome = self.gateway.execute(&request).await;
        ActionReply {
            request_id: request.id,
            text: outcome.render(self.store.ui_locale()),
        }
    }

    pub async fn test_connection(&self) -> bool {
        self.gateway.test_connection(&self.store.api_key()).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::use_cases::model_gateway::tests::{FakeClient, Script};
    use crate::domain::llm_config::LLMConfig;
    use crate::domain::locale::UiLocale;
    use crate::domain::settings::SettingKey;
    use serde_json::json;

    fn use_case(client: &Arc<FakeClient>, dir: &tempfile::TempDir) -> (ActionUseCase, Arc<SettingsStore>) {
        let store = Arc::new(SettingsStore::new(dir.path().join("settings.json")));
        let gateway = ModelGateway::new(client.clone(), LLMConfig::default());
        (ActionUseCase::new(gateway, store.clone()), store)
    }

    const KINDS: [ActionKind; 4] = [
        ActionKind::Translate,
        ActionKind::Reformulate,
        ActionKind::Correct,
        ActionKind::Summarize,
    ];

    #[tokio::test]
    async fn test_without_key_every_action_asks_for_configuration() {
        let dir = tempfile::tempdir().unwrap();
        let client = FakeClient::new(Script::Reply("x"));
        let (actions, _) = use_case(&client, &dir);

        for kind in KINDS {
            let reply = actions
                .execute(kind, "Olá".to_string(), RequestId::new())
                .await;
            assert_eq!(reply.text, UiLocale::Pt.missing_api_key());
        }
        assert!(client.calls().is_empty());
    }

    #[tokio::test]
    async fn test_blank_text_returns_empty_string() {
        let dir = tempfile::tempdir().unwrap();
        let client = FakeClient::new(Script::Reply("x"));
        let (actions, store) = use_case(&client, &dir);
        store.set(SettingKey::ApiKey, json!("key")).unwrap();

        for kind in KINDS {
            let reply = actions.execute(kind, "  ".to_string(), RequestId::new()).await;
            assert_eq!(reply.text, "");
        }
        assert!(client.calls().is_empty());
    }

    #[tokio::test]
    async fn test_translate_reads_languages_at_call_time() {
        let dir = tempfile::tempdir().unwrap();
        let client = FakeClient::new(Script::Reply("Hola"));
        let (actions, store) = use_case(&client, &dir);
        store.set(SettingKey::ApiKey, json!("key")).unwrap();
        store.set(SettingKey::ToLanguage, json!("es")).unwrap();

        let id = RequestId::from_caller(Some("req-7".to_string()));
        let reply = actions
            .execute(ActionKind::Translate, "Hello".to_string(), id.clone())
            .await;

        assert_eq!(reply.request_id, id);
        assert_eq!(reply.text, "Hola");
        assert!(client.calls()[0].system.contains("Spanish (es)"));

        store.set(SettingKey::ToLanguage, json!("fr")).unwrap();
        actions
            .execute(ActionKind::Translate, "Hello".to_string(), RequestId::new())
            .await;
        assert!(client.calls()[1].system.contains("French (fr)"));
    }

    #[tokio::test]
    async fn test_failures_render_in_ui_language() {
        let dir = tempfile::tempdir().unwrap();
        let client = FakeClient::new(Script::Status(400));
        let (actions, store) = use_case(&client, &dir);
        store.set(SettingKey::ApiKey, json!("bad")).unwrap();
        store.set(SettingKey::UiLanguage, json!("en")).unwrap();

        let reply = actions
            .execute(ActionKind::Correct, "teh".to_string(), RequestId::new())
            .await;
        assert_eq!(reply.text, UiLocale::En.invalid_api_key());

        let dir = tempfile::tempdir().unwrap();
        let client = FakeClient::new(Script::Status(503));
        let (actions, store) = use_case(&client, &dir);
        store.set(SettingKey::ApiKey, json!("key")).unwrap();

        let reply = actions
            .execute(ActionKind::Summarize, "texto".to_string(), RequestId::new())
            .await;
        assert_eq!(reply.text, UiLocale::Pt.request_failed());
    }

    #[tokio::test]
    async fn test_connection_uses_configured_key() {
        let dir = tempfile::tempdir().unwrap();
        let client = FakeClient::new(Script::Reply("OK"));
        let (actions, store) = use_case(&client, &dir);

        assert!(!actions.test_connection().await);
        store.set(SettingKey::ApiKey, json!("key")).unwrap();
        assert!(actions.test_connection().await);
        assert_eq!(client.calls()[0].api_key, "key");
    }
}
