//! Directory listing

use serde::Serialize;
use std::path::Path;
use tokio::fs;

use super::FileError;
use crate::logger;

/// One child of a listed directory, as sent to the client
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DirEntry {
    pub name: String,
    pub is_directory: bool,
    /// Byte length reported by the filesystem (not recursive for directories)
    pub size: u64,
}

/// List the immediate children of `dir` in enumeration order.
///
/// Fails only when `dir` is missing or is not a directory. A directory that
/// exists but cannot be enumerated yields an empty listing.
pub async fn list_directory(dir: &Path) -> Result<Vec<DirEntry>, FileError> {
    let metadata = fs::metadata(dir)
        .await
        .map_err(|_| FileError::NotFound(dir.display().to_string()))?;
    if !metadata.is_dir() {
        return Err(FileError::NotADirectory(dir.display().to_string()));
    }

    match read_entries(dir).await {
        Ok(entries) => Ok(entries),
        Err(e) => {
            logger::log_error(&format!(
                "Failed to enumerate '{}': {e}, returning empty listing",
                dir.display()
            ));
            Ok(Vec::new())
        }
    }
}

async fn read_entries(dir: &Path) -> std::io::Result<Vec<DirEntry>> {
    let mut reader = fs::read_dir(dir).await?;
    let mut entries = Vec::new();

    while let Some(entry) = reader.next_entry().await? {
        // Follow symlinks; an unreadable target reports as an empty file
        let (is_directory, size) = match fs::metadata(entry.path()).await {
            Ok(m) => (m.is_dir(), m.len()),
            Err(_) => (false, 0),
        };
        entries.push(DirEntry {
            name: entry.file_name().to_string_lossy().into_owned(),
            is_directory,
            size,
        });
    }

    Ok(entries)
}
