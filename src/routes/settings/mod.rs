pub mod settings_handlers;
pub mod settings_models;
