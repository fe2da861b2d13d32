use std::env;

/// Server-side configuration, read once at startup. Environment variables
/// override the local defaults.
pub struct ServerConfig {
    pub bind_addr: String,
    pub database_url: String,
}

impl ServerConfig {
    pub fn from_env() -> Self {
        Self {
            bind_addr: env::var("BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:8080".to_string()),
            database_url: env::var("DATABASE_URL")
                .unwrap_or_else(|_| "sqlite://taskdash.db".to_string()),
        }
    }
}

/// Base URL the data-fetch layer talks to. `API_BASE_URL` selects a deployed
/// backend; the default targets a locally running server.
pub fn api_base_url() -> String {
    env::var("API_BASE_URL").unwrap_or_else(|_| "http://localhost:8080".to_string())
}
