use std::sync::Arc;

use tauri::{Manager, RunEvent, WindowEvent};
use tauri_plugin_autostart::MacosLauncher;
use tauri_plugin_global_shortcut::GlobalShortcutExt;
use tracing::{error, info};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

use crate::domain::surface::{HideReason, SurfaceEvent};
use crate::infrastructure::log_buffer::LogBuffer;
use crate::interfaces::tauri::{AppState, MAIN_WINDOW};

fn init_tracing(logs: &LogBuffer) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .with(logs.layer())
        .try_init();
}

fn send_surface_event(app: &tauri::AppHandle, event: SurfaceEvent) {
    if let Some(state) = app.try_state::<Arc<AppState>>() {
        state.surface.send(event);
    }
}

pub fn run() {
    let logs = LogBuffer::new();
    init_tracing(&logs);

    let app = tauri::Builder::default()
        .plugin(tauri_plugin_opener::init())
        .plugin(tauri_plugin_global_shortcut::Builder::new().build())
        .plugin(tauri_plugin_autostart::init(
            MacosLauncher::LaunchAgent,
            None,
        ))
        .setup(move |app| crate::infrastructure::bootstrap::setup(app, logs.clone()))
        .invoke_handler(tauri::generate_handler![
            crate::interfaces::tauri::core_commands::config_get,
            crate::interfaces::tauri::core_commands::config_set,
            crate::interfaces::tauri::core_commands::config_reset,
            crate::interfaces::tauri::core_commands::config_set_start_on_login,
            crate::interfaces::tauri::core_commands::action_translate,
            crate::interfaces::tauri::core_commands::action_reformulate,
            crate::interfaces::tauri::core_commands::action_correct,
            crate::interfaces::tauri::core_commands::action_summarize,
            crate::interfaces::tauri::core_commands::action_test_connection,
            crate::interfaces::tauri::core_commands::surface_hide,
            crate::interfaces::tauri::core_commands::get_logs,
        ])
        .on_window_event(|window, event| {
            if window.label() != MAIN_WINDOW {
                return;
            }
            match event {
                WindowEvent::Focused(false) => {
                    send_surface_event(window.app_handle(), SurfaceEvent::Hide(HideReason::FocusLost))
                }
                // The panel lives for the whole session; closing only hides it.
                WindowEvent::CloseRequested { api, .. } => {
                    api.prevent_close();
                    send_surface_event(window.app_handle(), SurfaceEvent::Hide(HideReason::Escape));
                }
                _ => {}
            }
        })
        .build(tauri::generate_context!())
        .expect("error while building tauri application");

    app.run(|app_handle, event| match event {
        #[cfg(target_os = "macos")]
        RunEvent::Reopen {
            has_visible_windows: false,
            ..
        } => send_surface_event(app_handle, SurfaceEvent::Reopen),
        RunEvent::Exit => {
            send_surface_event(app_handle, SurfaceEvent::Shutdown);
            // The controller task may not run again before the process ends.
            if let Err(err) = app_handle.global_shortcut().unregister_all() {
                error!(error = %err, "Failed to release hotkeys on exit");
            }
            info!("QuickTray stopped");
        }
        _ => {}
    });
}
