use crate::domain::locale::UiLocale;
use crate::domain::settings::AUTO_DETECT;
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActionKind {
    Translate,
    Reformulate,
    Correct,
    Summarize,
}

impl ActionKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ActionKind::Translate => "translate",
            ActionKind::Reformulate => "reformulate",
            ActionKind::Correct => "correct",
            ActionKind::Summarize => "summarize",
        }
    }
}

impl fmt::Display for ActionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LanguagePair {
    pub source: String,
    pub target: String,
}

impl LanguagePair {
    pub fn new(source: impl Into<String>, target: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            target: target.into(),
        }
    }

    pub fn detects_source(&self) -> bool {
        let source = self.source.trim();
        source.is_empty() || source == AUTO_DETECT
    }
}

/// Correlates a reply with the invocation that produced it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RequestId(String);

impl RequestId {
    pub fn new() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    /// Reuses an identifier supplied by the caller, or mints a fresh one.
    pub fn from_caller(id: Option<String>) -> Self {
        match id {
            Some(id) if !id.trim().is_empty() => Self(id),
            _ => Self::new(),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for RequestId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for RequestId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// One user invocation, consumed once by the gateway.
#[derive(Debug, Clone)]
pub struct ActionRequest {
    pub id: RequestId,
    pub kind: ActionKind,
    pub text: String,
    pub api_key: String,
    /// Only meaningful for [`ActionKind::Translate`].
    pub languages: Option<LanguagePair>,
}

impl ActionRequest {
    pub fn new(kind: ActionKind, text: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            id: RequestId::new(),
            kind,
            text: text.into(),
            api_key: api_key.into(),
            languages: None,
        }
    }

    pub fn translate(
        text: impl Into<String>,
        api_key: impl Into<String>,
        languages: LanguagePair,
    ) -> Self {
        Self {
            languages: Some(languages),
            ..Self::new(ActionKind::Translate, text, api_key)
        }
    }

    pub fn with_id(mut self, id: RequestId) -> Self {
        self.id = id;
        self
    }
}

/// Classified result of a gateway call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ActionOutcome {
    /// Blank input; the provider was not contacted.
    Empty,
    Completed(String),
    MissingApiKey,
    InvalidApiKey,
    Failed,
}

impl ActionOutcome {
    /// The string the panel shows for this outcome.
    pub fn render(self, locale: UiLocale) -> String {
        match self {
            ActionOutcome::Empty => String::new(),
            ActionOutcome::Completed(text) => text,
            ActionOutcome::MissingApiKey => locale.missing_api_key().to_string(),
            ActionOutcome::InvalidApiKey => locale.invalid_api_key().to_string(),
            ActionOutcome::Failed => locale.request_failed().to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActionReply {
    pub request_id: RequestId,
    pub text: String,
}
