use std::sync::Arc;

use serde_json::Value as JsonValue;
use tauri::State;

use crate::domain::action::{ActionKind, ActionReply, RequestId};
use crate::domain::error::Result;
use crate::domain::surface::{HideReason, SurfaceEvent};
use crate::infrastructure::log_buffer::LogEntry;

use super::state::AppState;

#[tauri::command]
pub fn config_get(state: State<'_, Arc<AppState>>, field: String) -> Result<JsonValue> {
    state.preferences.get(&field)
}

#[tauri::command]
pub fn config_set(state: State<'_, Arc<AppState>>, field: String, value: JsonValue) -> Result<()> {
    state.preferences.set(&field, value)
}

#[tauri::command]
pub fn config_reset(state: State<'_, Arc<AppState>>) -> Result<()> {
    state.preferences.reset()
}

#[tauri::command]
pub fn config_set_start_on_login(state: State<'_, Arc<AppState>>, enabled: bool) -> Result<()> {
    state.preferences.set_start_on_login(enabled)
}

async fn run_action(
    state: &AppState,
    kind: ActionKind,
    text: String,
    request_id: Option<String>,
) -> Result<ActionReply> {
    let id = RequestId::from_caller(request_id);
    Ok(state.actions.execute(kind, text, id).await)
}

#[tauri::command]
pub async fn action_translate(
    state: State<'_, Arc<AppState>>,
    text: String,
    request_id: Option<String>,
) -> Result<ActionReply> {
    run_action(&state, ActionKind::Translate, text, request_id).await
}

#[tauri::command]
pub async fn action_reformulate(
    state: State<'_, Arc<AppState>>,
    text: String,
    request_id: Option<String>,
) -> Result<ActionReply> {
    run_action(&state, ActionKind::Reformulate, text, request_id).await
}

#[tauri::command]
pub async fn action_correct(
    state: State<'_, Arc<AppState>>,
    text: String,
    request_id: Option<String>,
) -> Result<ActionReply> {
    run_action(&state, ActionKind::Correct, text, request_id).await
}

#[tauri::command]
pub async fn action_summarize(
    state: State<'_, Arc<AppState>>,
    text: String,
    request_id: Option<String>,
) -> Result<ActionReply> {
    run_action(&state, ActionKind::Summarize, text, request_id).await
}

#[tauri::command]
pub async fn action_test_connection(state: State<'_, Arc<AppState>>) -> Result<bool> {
    Ok(state.actions.test_connection().await)
}

/// Escape from the panel.
#[tauri::command]
pub fn surface_hide(state: State<'_, Arc<AppState>>) {
    state.surface.send(SurfaceEvent::Hide(HideReason::Escape));
}

#[tauri::command]
pub fn get_logs(state: State<'_, Arc<AppState>>) -> Vec<LogEntry> {
    state.logs.entries()
}
