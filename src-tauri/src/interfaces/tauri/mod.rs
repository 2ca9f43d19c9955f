pub(crate) mod core_commands;
pub(crate) mod state;
pub mod window;

pub use state::AppState;
pub use window::{TauriSurface, MAIN_WINDOW};
