// Typed view of config.toml and DIEX_* overrides

use serde::Deserialize;
use std::path::PathBuf;

pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 8080;
pub const DEFAULT_WORKERS: usize = 10;
pub const DEFAULT_DOWNLOAD_BUFFER_SIZE: usize = 8 * 1024;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub server: ServerConfig,
    pub files: FilesConfig,
    pub logging: LoggingConfig,
    pub performance: PerformanceConfig,
}

/// Listen address and pool size
#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Size of the request worker pool, also used for runtime threads
    pub workers: usize,
}

/// Exposed directory tree
#[derive(Debug, Deserialize, Clone)]
pub struct FilesConfig {
    /// Root directory every sub-path is resolved against
    pub root_dir: PathBuf,
    /// Chunk size used when streaming downloads
    #[serde(default = "default_download_buffer_size")]
    pub download_buffer_size: usize,
}

#[derive(Debug, Deserialize, Clone)]
pub struct LoggingConfig {
    pub access_log: bool,
    /// `combined`, `common`, `json`, or a `$variable` pattern
    #[serde(default = "default_access_log_format")]
    pub access_log_format: String,
    /// Falls back to stdout when unset
    #[serde(default)]
    pub access_log_file: Option<String>,
    /// Falls back to stderr when unset
    #[serde(default)]
    pub error_log_file: Option<String>,
}

/// HTTP connection behaviour
#[derive(Debug, Deserialize, Clone)]
pub struct PerformanceConfig {
    pub keep_alive: bool,
}

#[allow(clippy::missing_const_for_fn)]
fn default_download_buffer_size() -> usize {
    DEFAULT_DOWNLOAD_BUFFER_SIZE
}

#[allow(clippy::missing_const_for_fn)]
fn default_access_log_format() -> String {
    "combined".to_string()
}

/// `$HOME/Documents`, or a relative `Documents` when no home is known
pub fn default_root_dir() -> PathBuf {
    dirs::home_dir().unwrap_or_default().join("Documents")
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: ServerConfig {
                host: DEFAULT_HOST.to_string(),
                port: DEFAULT_PORT,
                workers: DEFAULT_WORKERS,
            },
            files: FilesConfig {
                root_dir: default_root_dir(),
                download_buffer_size: DEFAULT_DOWNLOAD_BUFFER_SIZE,
            },
            logging: LoggingConfig {
                access_log: true,
                access_log_format: default_access_log_format(),
                access_log_file: None,
                error_log_file: None,
            },
            performance: PerformanceConfig { keep_alive: true },
        }
    }
}
