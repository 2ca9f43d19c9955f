use std::error::Error;
use std::sync::Arc;

use tauri::Manager;
use tracing::{error, info};

use crate::application::{
    surface_channel, ActionUseCase, ModelGateway, PreferencesUseCase, SurfaceController,
};
use crate::infrastructure::autostart::TauriLoginItem;
use crate::infrastructure::config::load_llm_config;
use crate::infrastructure::llm_clients::{GeminiClient, LLMClient};
use crate::infrastructure::log_buffer::LogBuffer;
use crate::infrastructure::settings_store::SettingsStore;
use crate::infrastructure::storage::{resolve_app_data_dir, settings_path};
use crate::interfaces::shortcuts::{ShortcutSyntax, TauriHotkeys};
use crate::interfaces::tauri::{AppState, TauriSurface, MAIN_WINDOW};
use crate::interfaces::tray::setup_tray;

pub fn setup(app: &mut tauri::App, logs: LogBuffer) -> Result<(), Box<dyn Error>> {
    let app_handle = app.handle().clone();

    let app_data_dir = resolve_app_data_dir(&app_handle).map_err(|err| {
        error!(error = %err, "Failed to resolve app data dir");
        err
    })?;

    let store = Arc::new(SettingsStore::new(settings_path(&app_data_dir)));
    info!(path = %store.path().display(), "Settings store ready");

    let llm_config = load_llm_config();
    let llm_client: Arc<dyn LLMClient + Send + Sync> = Arc::new(GeminiClient::new(&llm_config));
    let gateway = ModelGateway::new(llm_client, llm_config);

    let (surface, events) = surface_channel();
    let window = app_handle
        .get_webview_window(MAIN_WINDOW)
        .ok_or("main window is not configured")?;
    let controller = SurfaceController::new(
        TauriSurface::new(window),
        TauriHotkeys::new(app_handle.clone(), surface.clone()),
    );
    tauri::async_runtime::spawn(controller.run(events));

    let preferences = PreferencesUseCase::new(
        store.clone(),
        Arc::new(TauriLoginItem::new(app_handle.clone())),
        Arc::new(ShortcutSyntax),
        surface.clone(),
    );
    preferences.apply_startup();

    setup_tray(&app_handle, surface.clone(), store.ui_locale())?;

    app.manage(Arc::new(AppState {
        actions: ActionUseCase::new(gateway, store),
        preferences,
        surface,
        logs,
    }));

    info!("QuickTray started");
    Ok(())
}
