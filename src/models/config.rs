use serde::Deserialize;

/// Configuration options for the storefront server.
///
/// Values come from `config.yaml` (when present) overlaid with
/// `STOREFRONT_`-prefixed environment variables.
#[derive(Clone, Debug, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_bind_address")]
    pub bind_address: String,
    #[serde(default = "default_port")]
    pub port: u16,
    #[serde(default = "default_database_url")]
    pub database_url: String,
    #[serde(default = "default_assets_dir")]
    pub assets_dir: String,
}

fn default_bind_address() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    8080
}

fn default_database_url() -> String {
    "storefront.db".to_string()
}

fn default_assets_dir() -> String {
    "assets".to_string()
}

impl ServerConfig {
    pub fn load() -> Result<Self, config::ConfigError> {
        config::Config::builder()
            .add_source(config::File::with_name("config").required(false))
            .add_source(config::Environment::with_prefix("STOREFRONT"))
            .build()?
            .try_deserialize()
    }
}
