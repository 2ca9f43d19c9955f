pub mod shortcuts;
pub mod tauri;
pub mod tray;
