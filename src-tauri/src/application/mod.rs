pub mod use_cases;

pub use use_cases::actions::ActionUseCase;
pub use use_cases::model_gateway::ModelGateway;
pub use use_cases::preferences::PreferencesUseCase;
pub use use_cases::surface::{surface_channel, SurfaceController, SurfaceHandle};
