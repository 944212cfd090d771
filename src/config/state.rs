// Application state module
// Read-only state shared by every connection task

use super::types::Config;
use crate::files::RootDir;
use crate::server::WorkerPool;

/// Application state
///
/// Built once at startup and handed to each connection behind an `Arc`.
/// Nothing in here changes after construction.
pub struct AppState {
    pub config: Config,
    pub root: RootDir,
    pub pool: WorkerPool,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        let root = RootDir::new(config.files.root_dir.clone());
        let pool = WorkerPool::new(config.server.workers);

        Self { config, root, pool }
    }

    /// Chunk size for streamed downloads
    pub const fn download_buffer_size(&self) -> usize {
        self.config.files.download_buffer_size
    }

    pub const fn access_log_enabled(&self) -> bool {
        self.config.logging.access_log
    }
}
