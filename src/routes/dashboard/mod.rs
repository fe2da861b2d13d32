pub mod dashboard_handlers;
pub mod dashboard_models;
