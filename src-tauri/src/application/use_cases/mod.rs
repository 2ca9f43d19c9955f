pub mod actions;
pub mod model_gateway;
pub mod preferences;
pub mod prompt_builder;
pub mod surface;
