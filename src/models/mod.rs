pub mod mentor;
pub mod settings;
pub mod task;
