pub mod action;
pub mod error;
pub mod llm_config;
pub mod locale;
pub mod settings;
pub mod surface;
