use crate::domain::action::LanguagePair;
use crate::domain::error::Result;
use crate::domain::locale::UiLocale;
use crate::domain::settings::{SettingKey, Settings};
use crate::infrastructure::storage::atomic_write;
use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, MutexGuard};
use tracing::{info, warn};

/// Durable user settings backed by a single JSON file.
///
/// The file is read lazily on first access. Any read or parse failure yields
/// the default record; nothing is written until the first mutation. Every
/// mutation rewrites the complete record atomically.
pub struct SettingsStore {
    path: PathBuf,
    cache: Mutex<Option<Settings>>,
}

impl SettingsStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            cache: Mutex::new(None),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn get(&self, key: SettingKey) -> Value {
        self.loaded().as_ref().map(|s| s.get(key)).unwrap_or_default()
    }

    pub fn snapshot(&self) -> Settings {
        self.loaded().clone().unwrap_or_default()
    }

    pub fn api_key(&self) -> String {
        self.read(|s| s.api_key.clone())
    }

    pub fn languages(&self) -> LanguagePair {
        self.read(|s| LanguagePair::new(s.from_language.clone(), s.to_language.clone()))
    }

    pub fn ui_locale(&self) -> UiLocale {
        self.read(|s| UiLocale::from_code(&s.ui_language))
    }

    pub fn shortcut(&self) -> String {
        self.read(|s| s.shortcut.clone())
    }

    pub fn start_on_login(&self) -> bool {
        self.read(|s| s.start_on_login)
    }

    /// Updates one field and persists the whole record before returning.
    /// The in-memory record only changes once the file write succeeded.
    pub fn set(&self, key: SettingKey, value: Value) -> Result<()> {
        let mut guard = self.loaded();
        let mut next = guard.clone().unwrap_or_default();
        next.set(key, value)?;
        self.persist(&next)?;
        *guard = Some(next);
        Ok(())
    }

    pub fn reset(&self) -> Result<()> {
        let mut guard = self.loaded();
        let defaults = Settings::default();
        self.persist(&defaults)?;
        *guard = Some(defaults);
        info!(path = %self.path.display(), "Settings reset to defaults");
        Ok(())
    }

    fn read<R>(&self, f: impl FnOnce(&Settings) -> R) -> R {
        let guard = self.loaded();
        match guard.as_ref() {
            Some(settings) => f(settings),
            None => f(&Settings::default()),
        }
    }

    fn loaded(&self) -> MutexGuard<'_, Option<Settings>> {
        let mut guard = self
            .cache
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        if guard.is_none() {
            *guard = Some(load_or_default(&self.path));
        }
        guard
    }

    fn persist(&self, settings: &Settings) -> Result<()> {
        let bytes = serde_json::to_vec_pretty(settings)?;
        atomic_write(&self.path, &bytes)?;
        Ok(())
    }
}

fn load_or_default(path: &Path) -> Settings {
    let raw = match fs::read(path) {
        Ok(raw) => raw,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => return Settings::default(),
        Err(err) => {
            warn!(error = %err, path = %path.display(), "Failed to read settings, using defaults");
            return Settings::default();
        }
    };

    match serde_json::from_slice::<Settings>(&raw) {
        Ok(settings) => settings,
        Err(err) => {
            warn!(error = %err, path = %path.display(), "Settings file is corrupted, using defaults");
            Settings::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn store_in(dir: &tempfile::TempDir) -> SettingsStore {
        SettingsStore::new(dir.path().join("settings.json"))
    }

    #[test]
    fn test_fresh_store_yields_defaults_without_writing() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);

        assert_eq!(store.snapshot(), Settings::default());
        for key in SettingKey::ALL {
            assert_eq!(store.get(key), Settings::default().get(key));
        }
        assert!(!store.path().exists());
    }

    #[test]
    fn test_set_then_get_round_trips_every_field() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);
        let values = [
            (SettingKey::Shortcut, json!("Alt+Shift+T")),
            (SettingKey::StartOnLogin, json!(true)),
            (SettingKey::ApiKey, json!("AIza-test")),
            (SettingKey::FromLanguage, json!("en")),
            (SettingKey::ToLanguage, json!("es")),
            (SettingKey::UiLanguage, json!("en")),
        ];

        for (key, value) in values.clone() {
            store.set(key, value).unwrap();
        }
        for (key, value) in &values {
            assert_eq!(&store.get(*key), value);
        }

        let reopened = store_in(&dir);
        for (key, value) in &values {
            assert_eq!(&reopened.get(*key), value);
        }
    }

    #[test]
    fn test_every_write_is_a_complete_record() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);
        store.set(SettingKey::ApiKey, json!("k")).unwrap();

        let on_disk: Value = serde_json::from_slice(&fs::read(store.path()).unwrap()).unwrap();
        let object = on_disk.as_object().unwrap();
        assert_eq!(object.len(), 6);
        assert_eq!(object["apiKey"], "k");
        assert_eq!(object["shortcut"], "CommandOrControl+,");
    }

    #[test]
    fn test_corrupted_file_falls_back_to_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");

        for garbage in [
            &b"{\"apiKey\": \"trunc"[..],
            &b"\xff\xfe\x00not utf8"[..],
            &b"[1, 2, 3]"[..],
            &b"{\"startOnLogin\": \"yes\"}"[..],
            &b""[..],
        ] {
            fs::write(&path, garbage).unwrap();
            let store = SettingsStore::new(&path);
            assert_eq!(store.snapshot(), Settings::default());
            assert_eq!(store.api_key(), "");
        }
    }

    #[test]
    fn test_older_file_missing_fields_still_loads() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        fs::write(&path, r#"{"apiKey":"old","toLanguage":"fr"}"#).unwrap();

        let store = SettingsStore::new(&path);
        assert_eq!(store.api_key(), "old");
        assert_eq!(store.languages(), LanguagePair::new("auto", "fr"));
        assert_eq!(store.ui_locale(), UiLocale::Pt);
    }

    #[test]
    fn test_reset_restores_and_persists_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);
        store.set(SettingKey::StartOnLogin, json!(true)).unwrap();
        store.set(SettingKey::ApiKey, json!("k")).unwrap();

        store.reset().unwrap();

        assert_eq!(store.snapshot(), Settings::default());
        assert_eq!(store_in(&dir).snapshot(), Settings::default());
    }

    #[test]
    fn test_rejected_value_leaves_store_untouched() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);
        assert!(store.set(SettingKey::StartOnLogin, json!("true")).is_err());
        assert!(!store.start_on_login());
        assert!(!store.path().exists());
    }

    #[test]
    fn test_write_failure_propagates_and_keeps_memory_consistent() {
        let dir = tempfile::tempdir().unwrap();
        // A regular file where the parent directory should be makes every write fail.
        let blocker = dir.path().join("blocker");
        fs::write(&blocker, b"").unwrap();
        let store = SettingsStore::new(blocker.join("settings.json"));

        assert!(store.set(SettingKey::ApiKey, json!("k")).is_err());
        assert_eq!(store.api_key(), "");
    }
}
