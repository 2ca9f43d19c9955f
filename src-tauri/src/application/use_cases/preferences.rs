use crate::application::use_cases::surface::{AcceleratorCheck, SurfaceHandle};
use crate::domain::error::Result;
use crate::domain::settings::{SettingKey, DEFAULT_SHORTCUT};
use crate::domain::surface::SurfaceEvent;
use crate::infrastructure::autostart::LoginItem;
use crate::infrastructure::settings_store::SettingsStore;
use serde_json::Value;
use std::sync::Arc;
use tracing::{error, info, warn};

/// Configuration commands plus the side effects that hang off them: the
/// login item and the global hotkey.
pub struct PreferencesUseCase {
    store: Arc<SettingsStore>,
    login_item: Arc<dyn LoginItem>,
    accelerators: Arc<dyn AcceleratorCheck>,
    surface: SurfaceHandle,
}

impl PreferencesUseCase {
    pub fn new(
        store: Arc<SettingsStore>,
        login_item: Arc<dyn LoginItem>,
        accelerators: Arc<dyn AcceleratorCheck>,
        surface: SurfaceHandle,
    ) -> Self {
        Self {
            store,
            login_item,
            accelerators,
            surface,
        }
    }

    pub fn get(&self, field: &str) -> Result<Value> {
        let key: SettingKey = field.parse()?;
        Ok(self.store.get(key))
    }

    pub fn set(&self, field: &str, value: Value) -> Result<()> {
        let key: SettingKey = field.parse()?;
        if key == SettingKey::Shortcut {
            if let Some(accelerator) = value.as_str() {
                self.accelerators.check(accelerator.trim())?;
            }
        }
        let previous_shortcut = self.store.shortcut();
        self.store.set(key, value)?;

        if key == SettingKey::Shortcut {
            let shortcut = self.store.shortcut();
            if shortcut != previous_shortcut {
                self.surface.send(SurfaceEvent::RebindHotkey(shortcut));
            }
        }
        Ok(())
    }

    pub fn reset(&self) -> Result<()> {
        self.store.reset()?;
        self.apply_login_item(self.store.start_on_login());
        self.surface
            .send(SurfaceEvent::RebindHotkey(self.store.shortcut()));
        Ok(())
    }

    pub fn set_start_on_login(&self, enabled: bool) -> Result<()> {
        self.store.set(SettingKey::StartOnLogin, Value::Bool(enabled))?;
        self.apply_login_item(enabled);
        Ok(())
    }

    /// Brings OS state in line with the persisted record at startup and binds
    /// the configured hotkey, or the default one if the stored value is unusable.
    pub fn apply_startup(&self) {
        self.apply_login_item(self.store.start_on_login());

        let shortcut = self.store.shortcut();
        let shortcut = match self.accelerators.check(shortcut.trim()) {
            Ok(()) => shortcut,
            Err(err) => {
                warn!(error = %err, shortcut = %shortcut, "Stored shortcut is invalid, binding the default");
                DEFAULT_SHORTCUT.to_string()
            }
        };
        self.surface.send(SurfaceEvent::RebindHotkey(shortcut));
    }

    fn apply_login_item(&self, enabled: bool) {
        match self.login_item.apply(enabled) {
            Ok(()) => info!(enabled, "Login item applied"),
            Err(err) => error!(error = %err, enabled, "Failed to apply login item"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::use_cases::surface::surface_channel;
    use crate::domain::error::AppError;
    use crate::domain::settings::Settings;
    use serde_json::json;
    use std::sync::Mutex;
    use tokio::sync::mpsc::UnboundedReceiver;

    #[derive(Default)]
    struct FakeLoginItem {
        applied: Mutex<Vec<bool>>,
    }

    impl LoginItem for FakeLoginItem {
        fn apply(&self, enabled: bool) -> Result<()> {
            self.applied.lock().unwrap().push(enabled);
            Ok(())
        }
    }

    /// Accepts anything except blank strings and unknown modifiers.
    struct FakeAccelerators;

    impl AcceleratorCheck for FakeAccelerators {
        fn check(&self, accelerator: &str) -> Result<()> {
            if accelerator.is_empty() || accelerator.starts_with("Hyper") {
                return Err(AppError::ShortcutError(format!("invalid: {accelerator:?}")));
            }
            Ok(())
        }
    }

    struct Fixture {
        _dir: tempfile::TempDir,
        store: Arc<SettingsStore>,
        login: Arc<FakeLoginItem>,
        events: UnboundedReceiver<SurfaceEvent>,
        prefs: PreferencesUseCase,
    }

    fn fixture() -> Fixture {
        let dir = tempfile::tempdir().unwrap();
        let store = Arc::new(SettingsStore::new(dir.path().join("settings.json")));
        let login = Arc::new(FakeLoginItem::default());
        let (handle, events) = surface_channel();
        let prefs = PreferencesUseCase::new(
            store.clone(),
            login.clone(),
            Arc::new(FakeAccelerators),
            handle,
        );
        Fixture {
            _dir: dir,
            store,
            login,
            events,
            prefs,
        }
    }

    fn drain(events: &mut UnboundedReceiver<SurfaceEvent>) -> Vec<SurfaceEvent> {
        let mut out = Vec::new();
        while let Ok(event) = events.try_recv() {
            out.push(event);
        }
        out
    }

    #[test]
    fn test_get_unknown_field_is_rejected() {
        let f = fixture();
        assert!(matches!(
            f.prefs.get("theme"),
            Err(AppError::ValidationError(_))
        ));
    }

    #[test]
    fn test_get_defaults() {
        let f = fixture();
        assert_eq!(f.prefs.get("fromLanguage").unwrap(), json!("auto"));
        assert_eq!(f.prefs.get("startOnLogin").unwrap(), json!(false));
    }

    #[test]
    fn test_changing_shortcut_requests_rebind() {
        let mut f = fixture();
        f.prefs.set("shortcut", json!("Alt+Space")).unwrap();
        f.prefs.set("shortcut", json!("Alt+Space")).unwrap();
        f.prefs.set("apiKey", json!("k")).unwrap();

        assert_eq!(
            drain(&mut f.events),
            vec![SurfaceEvent::RebindHotkey("Alt+Space".to_string())]
        );
    }

    #[test]
    fn test_invalid_shortcut_is_rejected_before_storing() {
        let mut f = fixture();
        f.prefs.set("shortcut", json!("Alt+Space")).unwrap();
        drain(&mut f.events);

        for bad in ["", "  ", "Hyper+NotAKey"] {
            assert!(matches!(
                f.prefs.set("shortcut", json!(bad)),
                Err(AppError::ShortcutError(_))
            ));
        }

        assert_eq!(f.prefs.get("shortcut").unwrap(), json!("Alt+Space"));
        let reopened = SettingsStore::new(f.store.path());
        assert_eq!(reopened.shortcut(), "Alt+Space");
        assert!(drain(&mut f.events).is_empty());
    }

    #[test]
    fn test_apply_startup_falls_back_from_invalid_stored_shortcut() {
        let mut f = fixture();
        f.store.set(SettingKey::Shortcut, json!("Hyper+K")).unwrap();

        f.prefs.apply_startup();

        assert_eq!(
            drain(&mut f.events),
            vec![SurfaceEvent::RebindHotkey(DEFAULT_SHORTCUT.to_string())]
        );
    }

    #[test]
    fn test_set_start_on_login_persists_and_applies() {
        let f = fixture();
        f.prefs.set_start_on_login(true).unwrap();

        assert!(f.store.start_on_login());
        assert_eq!(*f.login.applied.lock().unwrap(), vec![true]);
    }

    #[test]
    fn test_reset_restores_defaults_and_side_effects() {
        let mut f = fixture();
        f.prefs.set_start_on_login(true).unwrap();
        f.prefs.set("shortcut", json!("Alt+Space")).unwrap();
        f.prefs.set("apiKey", json!("k")).unwrap();
        drain(&mut f.events);

        f.prefs.reset().unwrap();

        assert_eq!(f.store.snapshot(), Settings::default());
        for key in SettingKey::ALL {
            assert_eq!(
                f.prefs.get(key.as_str()).unwrap(),
                Settings::default().get(key)
            );
        }
        assert_eq!(f.login.applied.lock().unwrap().last(), Some(&false));
        assert_eq!(
            drain(&mut f.events),
            vec![SurfaceEvent::RebindHotkey("CommandOrControl+,".to_string())]
        );
    }

    #[test]
    fn test_apply_startup_uses_persisted_values() {
        let mut f = fixture();
        f.store.set(SettingKey::StartOnLogin, json!(true)).unwrap();
        f.store.set(SettingKey::Shortcut, json!("Ctrl+Shift+K")).unwrap();

        f.prefs.apply_startup();

        assert_eq!(*f.login.applied.lock().unwrap(), vec![true]);
        assert_eq!(
            drain(&mut f.events),
            vec![SurfaceEvent::RebindHotkey("Ctrl+Shift+K".to_string())]
        );
    }
}
