use crate::domain::error::{AppError, Result};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;
use std::str::FromStr;

pub const AUTO_DETECT: &str = "auto";

pub const DEFAULT_SHORTCUT: &str = "CommandOrControl+,";
pub const DEFAULT_FROM_LANGUAGE: &str = AUTO_DETECT;
pub const DEFAULT_TO_LANGUAGE: &str = "pt";
pub const DEFAULT_UI_LANGUAGE: &str = "pt";

/// The persisted user configuration record.
///
/// Missing fields fall back to their defaults when deserializing, so a file
/// written by an older build still loads as a complete record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Settings {
    pub shortcut: String,
    pub start_on_login: bool,
    pub api_key: String,
    pub from_language: String,
    pub to_language: String,
    pub ui_language: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            shortcut: DEFAULT_SHORTCUT.to_string(),
            start_on_login: false,
            api_key: String::new(),
            from_language: DEFAULT_FROM_LANGUAGE.to_string(),
            to_language: DEFAULT_TO_LANGUAGE.to_string(),
            ui_language: DEFAULT_UI_LANGUAGE.to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SettingKey {
    Shortcut,
    StartOnLogin,
    ApiKey,
    FromLanguage,
    ToLanguage,
    UiLanguage,
}

impl SettingKey {
    pub const ALL: [SettingKey; 6] = [
        SettingKey::Shortcut,
        SettingKey::StartOnLogin,
        SettingKey::ApiKey,
        SettingKey::FromLanguage,
        SettingKey::ToLanguage,
        SettingKey::UiLanguage,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SettingKey::Shortcut => "shortcut",
            SettingKey::StartOnLogin => "startOnLogin",
            SettingKey::ApiKey => "apiKey",
            SettingKey::FromLanguage => "fromLanguage",
            SettingKey::ToLanguage => "toLanguage",
            SettingKey::UiLanguage => "uiLanguage",
        }
    }
}

impl fmt::Display for SettingKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SettingKey {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self> {
        SettingKey::ALL
            .into_iter()
            .find(|key| key.as_str() == s)
            .ok_or_else(|| AppError::ValidationError(format!("Unknown setting: {}", s)))
    }
}

impl Settings {
    pub fn get(&self, key: SettingKey) -> Value {
        match key {
            SettingKey::Shortcut => Value::String(self.shortcut.clone()),
            SettingKey::StartOnLogin => Value::Bool(self.start_on_login),
            SettingKey::ApiKey => Value::String(self.api_key.clone()),
            SettingKey::FromLanguage => Value::String(self.from_language.clone()),
            SettingKey::ToLanguage => Value::String(self.to_language.clone()),
            SettingKey::UiLanguage => Value::String(self.ui_language.clone()),
        }
    }

    /// Writes one field. The record is left untouched when the value has the
    /// wrong JSON type for that field.
    pub fn set(&mut self, key: SettingKey, value: Value) -> Result<()> {
        let text = |value: Value| match value {
            Value::String(text) => Ok(text),
            _ => Err(type_mismatch(key, "string")),
        };
        match key {
            SettingKey::StartOnLogin => {
                self.start_on_login = value.as_bool().ok_or_else(|| type_mismatch(key, "boolean"))?
            }
            SettingKey::Shortcut => self.shortcut = text(value)?,
            SettingKey::ApiKey => self.api_key = text(value)?,
            SettingKey::FromLanguage => self.from_language = text(value)?,
            SettingKey::ToLanguage => self.to_language = text(value)?,
            SettingKey::UiLanguage => self.ui_language = text(value)?,
        }
        Ok(())
    }
}

fn type_mismatch(key: SettingKey, expected: &str) -> AppError {
    AppError::ValidationError(format!("Setting {} expects a {}", key, expected))
}
