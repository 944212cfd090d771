//! Root directory resolution

use std::path::{Component, Path, PathBuf};

use crate::logger;

/// The single directory tree the server exposes
#[derive(Debug, Clone)]
pub struct RootDir {
    path: PathBuf,
}

impl RootDir {
    pub const fn new(path: PathBuf) -> Self {
        Self { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Resolve a decoded sub-path to `root/<sub_path>`.
    ///
    /// Leading separators are collapsed so the sub-path is always appended to
    /// the root rather than replacing it. Parent components are kept as-is:
    /// the result is not confined to the root.
    pub fn resolve(&self, sub_path: &str) -> PathBuf {
        let relative = sub_path.trim_start_matches(std::path::is_separator);
        if relative.is_empty() {
            return self.path.clone();
        }

        let resolved = self.path.join(relative);
        if Path::new(relative)
            .components()
            .any(|c| matches!(c, Component::ParentDir))
        {
            logger::log_warning(&format!(
                "Sub-path '{sub_path}' contains parent components, resolved to {}",
                resolved.display()
            ));
        }
        resolved
    }
}
