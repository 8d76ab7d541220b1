use serde::Deserialize;

/// Configuration options for the idea directory service.
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    /// Path to the SQLite database file.
    pub database_url: String,
    /// Address the HTTP server binds to.
    pub bind_address: String,
    /// Items per listing page.
    pub items_per_page: usize,
}

impl ServerConfig {
    /// Loads configuration from an optional `config.yaml` next to the
    /// binary, overridable through environment variables.
    pub fn load() -> Result<Self, config::ConfigError> {
        config::Config::builder()
            .set_default("database_url", "ideas.db")?
            .set_default("bind_address", "127.0.0.1:8080")?
            .set_default("items_per_page", crate::pagination::DEFAULT_ITEMS_PER_PAGE as i64)?
            .add_source(config::File::with_name("config").required(false))
            .add_source(config::Environment::default())
            .build()?
            .try_deserialize()
    }
}
