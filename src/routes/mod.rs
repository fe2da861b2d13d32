pub mod dashboard;
pub mod routes;
pub mod settings;
pub mod tasks;
