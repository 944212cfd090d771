// Configuration module entry point
// Loads the startup configuration and owns the shared runtime state

mod state;
mod types;

use std::net::SocketAddr;

use crate::error::ServerError;

// Re-export public types
pub use state::AppState;
pub use types::Config;
use types::default_root_dir;

/// Default config file, resolved without extension
const DEFAULT_CONFIG_PATH: &str = "config";

impl Config {
    /// Load configuration from `config.toml` (if present) and `DIEX_*` variables
    pub fn load() -> Result<Self, ServerError> {
        Self::load_from(DEFAULT_CONFIG_PATH)
    }

    /// Load configuration from specified file path
    ///
    /// Values are layered: built-in defaults, then the file, then the environment
    /// (`DIEX_SERVER__PORT=9090`, `DIEX_FILES__ROOT_DIR=/srv/share`, ...).
    #[allow(clippy::cast_possible_wrap)]
    pub fn load_from(config_path: &str) -> Result<Self, ServerError> {
        let root_dir = default_root_dir();
        let settings = config::Config::builder()
            .set_default("server.host", types::DEFAULT_HOST)?
            .set_default("server.port", i64::from(types::DEFAULT_PORT))?
            .set_default("server.workers", types::DEFAULT_WORKERS as i64)?
            .set_default("files.root_dir", root_dir.to_string_lossy().into_owned())?
            .set_default(
                "files.download_buffer_size",
                types::DEFAULT_DOWNLOAD_BUFFER_SIZE as i64,
            )?
            .set_default("logging.access_log", true)?
            .set_default("logging.access_log_format", "combined")?
            .set_default("performance.keep_alive", true)?
            .add_source(config::File::with_name(config_path).required(false))
            .add_source(
                config::Environment::with_prefix("DIEX")
                    .prefix_separator("_")
                    .separator("__"),
            )
            .build()?;

        let cfg: Self = settings.try_deserialize()?;
        cfg.validate()?;
        Ok(cfg)
    }

    fn validate(&self) -> Result<(), ServerError> {
        if self.server.workers == 0 {
            return Err(ServerError::InvalidConfig(
                "server.workers must be at least 1".to_string(),
            ));
        }
        if self.files.download_buffer_size == 0 {
            return Err(ServerError::InvalidConfig(
                "files.download_buffer_size must be at least 1".to_string(),
            ));
        }
        Ok(())
    }

    pub fn get_socket_addr(&self) -> Result<SocketAddr, ServerError> {
        let addr = format!("{}:{}", self.server.host, self.server.port);
        addr.parse()
            .map_err(|source| ServerError::InvalidAddress { addr, source })
    }
}
