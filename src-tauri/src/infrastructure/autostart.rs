use crate::domain::error::Result;

/// OS registration that launches the app at login.
pub trait LoginItem: Send + Sync {
    fn apply(&self, enabled: bool) -> Result<()>;
}

#[cfg(feature = "desktop")]
pub use desktop::TauriLoginItem;

#[cfg(feature = "desktop")]
mod desktop {
    use super::LoginItem;
    use crate::domain::error::{AppError, Result};
    use tauri::AppHandle;
    use tauri_plugin_autostart::ManagerExt;
    use tracing::info;

    pub struct TauriLoginItem {
        app: AppHandle,
    }

    impl TauriLoginItem {
        pub fn new(app: AppHandle) -> Self {
            Self { app }
        }
    }

    impl LoginItem for TauriLoginItem {
        fn apply(&self, enabled: bool) -> Result<()> {
            let manager = self.app.autolaunch();
            // The OS call fails when disabling an entry that was never created.
            let registered = manager
                .is_enabled()
                .map_err(|e| AppError::Internal(format!("Failed to check autostart status: {}", e)))?;
            if registered == enabled {
                return Ok(());
            }

            if enabled {
                manager
                    .enable()
                    .map_err(|e| AppError::Internal(format!("Failed to enable autostart: {}", e)))?;
            } else {
                manager
                    .disable()
                    .map_err(|e| AppError::Internal(format!("Failed to disable autostart: {}", e)))?;
            }
            info!(enabled, "Start-on-login updated");
            Ok(())
        }
    }
}
