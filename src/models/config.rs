//! Configuration models loaded from external sources.

use serde::Deserialize;

/// Default number of blogs shown on one page of the list.
pub const DEFAULT_PAGE_LIMIT: usize = 5;

fn default_page_limit() -> usize {
    DEFAULT_PAGE_LIMIT
}

#[derive(Clone, Debug, Deserialize)]
/// Settings of the REST backend.
pub struct ServerConfig {
    pub address: String,
    pub port: u16,
    pub database_url: String,
}

#[derive(Clone, Debug, Deserialize)]
/// Settings of the console front end.
pub struct ClientConfig {
    /// Base URL of the backend, e.g. `http://localhost:8080`.
    pub api_base_url: String,
    #[serde(default = "default_page_limit")]
    pub page_limit: usize,
}

/// Reads `config/default.yaml`, then `config/{APP_ENV}.yaml` (`local` when
/// unset), then `APP_*` environment variables.
#[cfg(any(feature = "server", feature = "client"))]
pub fn load<T: serde::de::DeserializeOwned>() -> Result<T, config::ConfigError> {
    let app_env = std::env::var("APP_ENV").unwrap_or_else(|_| "local".into());

    config::Config::builder()
        .add_source(config::File::with_name("config/default"))
        .add_source(config::File::with_name(&format!("config/{app_env}")).required(false))
        .add_source(config::Environment::with_prefix("APP"))
        .build()?
        .try_deserialize()
}
