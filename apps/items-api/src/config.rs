use core_config::{AppInfo, FromEnv, app_info, cors::CorsConfig, env_flag, server::ServerConfig};

// Re-export Environment for use in other modules
pub use core_config::Environment;

/// Application-specific configuration
/// Composes shared config components from the `core_config` library
#[derive(Clone, Debug)]
pub struct Config {
    pub app: AppInfo,
    pub server: ServerConfig,
    pub cors: CorsConfig,
    pub environment: Environment,
    /// Start the store with the two sample items (`ITEMS_SEED`, default true)
    pub seed_items: bool,
}

impl Config {
    pub fn from_env() -> eyre::Result<Self> {
        let environment = Environment::from_env();
        let server = ServerConfig::from_env()?; // Uses defaults: HOST=0.0.0.0, PORT=8080
        let cors = CorsConfig::from_env()?; // Unset means any origin
        let seed_items = env_flag("ITEMS_SEED", true)?;

        Ok(Self {
            app: app_info!(),
            server,
            cors,
            environment,
            seed_items,
        })
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            app: app_info!(),
            server: ServerConfig::default(),
            cors: CorsConfig::default(),
            environment: Environment::Development,
            seed_items: true,
        }
    }
}
