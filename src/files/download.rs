//! File download source

use std::path::Path;
use tokio::fs::{self, File};
use tokio_util::io::ReaderStream;

use super::FileError;

/// An open file ready to be streamed, with its size taken at open time
#[derive(Debug)]
pub struct Download {
    file: File,
    len: u64,
}

impl Download {
    /// Byte size used for `Content-Length`
    pub const fn size(&self) -> u64 {
        self.len
    }

    /// Stream the file in chunks of at most `chunk_size` bytes.
    ///
    /// The file handle lives inside the stream and is closed when the stream
    /// is dropped, whether it finished or the client went away.
    pub fn into_stream(self, chunk_size: usize) -> ReaderStream<File> {
        ReaderStream::with_capacity(self.file, chunk_size)
    }
}

/// Open `path` for download. Missing paths and directories are rejected.
pub async fn open_download(path: &Path) -> Result<Download, FileError> {
    let metadata = fs::metadata(path)
        .await
        .map_err(|_| FileError::NotFound(path.display().to_string()))?;
    if metadata.is_dir() {
        return Err(FileError::NotAFile(path.display().to_string()));
    }

    let file = File::open(path).await.map_err(|source| FileError::Io {
        path: path.display().to_string(),
        source,
    })?;

    Ok(Download {
        file,
        len: metadata.len(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::TryStreamExt;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_streams_whole_file_in_bounded_chunks() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("data.bin");
        let content: Vec<u8> = (0..20_000u32).map(|i| (i % 251) as u8).collect();
        std::fs::write(&path, &content).unwrap();

        let download = open_download(&path).await.unwrap();
        assert_eq!(download.size(), 20_000);

        let chunks: Vec<_> = download.into_stream(8192).try_collect().await.unwrap();
        assert!(chunks.iter().all(|c| c.len() <= 8192));
        assert_eq!(chunks.concat(), content);
    }

    #[tokio::test]
    async fn test_empty_file() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("empty");
        std::fs::write(&path, b"").unwrap();

        let download = open_download(&path).await.unwrap();
        assert_eq!(download.size(), 0);
        let chunks: Vec<_> = download.into_stream(8192).try_collect().await.unwrap();
        assert!(chunks.is_empty());
    }

    #[tokio::test]
    async fn test_missing_file() {
        let tmp = TempDir::new().unwrap();
        let result = open_download(&tmp.path().join("missing")).await;
        assert!(matches!(result, Err(FileError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_directory_is_not_a_file() {
        let tmp = TempDir::new().unwrap();
        let result = open_download(tmp.path()).await;
        assert!(matches!(result, Err(FileError::NotAFile(_))));
    }
}
