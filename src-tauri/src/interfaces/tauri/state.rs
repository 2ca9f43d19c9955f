use crate::application::{ActionUseCase, PreferencesUseCase, SurfaceHandle};
use crate::infrastructure::log_buffer::LogBuffer;

pub struct AppState {
    pub actions: ActionUseCase,
    pub preferences: PreferencesUseCase,
    pub surface: SurfaceHandle,
    pub logs: LogBuffer,
}
