pub mod autostart;
#[cfg(feature = "desktop")]
pub mod bootstrap;
pub mod config;
pub mod llm_clients;
pub mod log_buffer;
pub mod settings_store;
pub mod storage;
