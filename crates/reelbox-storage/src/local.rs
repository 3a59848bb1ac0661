use crate::error::{StorageError, StorageResult};
use bytes::Bytes;
use std::path::{Path, PathBuf};
use tokio::fs;
use tokio::io::AsyncWriteExt;

/// Local filesystem store for uploaded thumbnail assets.
#[derive(Clone)]
pub struct AssetStore {
    root: PathBuf,
    base_url: String,
}

impl AssetStore {
    /// Create a new AssetStore instance
    ///
    /// # Arguments
    /// * `root` - Root directory for asset storage (e.g., "/var/lib/reelbox/assets")
    /// * `base_url` - Base URL for serving files (e.g., "http://localhost:8091/assets")
    pub async fn new(root: impl Into<PathBuf>, base_url: String) -> StorageResult<Self> {
        let root = root.into();

        fs::create_dir_all(&root).await.map_err(|e| {
            StorageError::ConfigError(format!(
                "Failed to create asset directory {}: {}",
                root.display(),
                e
            ))
        })?;

        Ok(AssetStore { root, base_url })
    }

    /// Convert a stored filename to a filesystem path with security validation
    ///
    /// Rejects names that contain path traversal sequences or that would
    /// escape the asset root.
    fn file_path(&self, filename: &str) -> StorageResult<PathBuf> {
        if filename.is_empty() {
            return Err(StorageError::InvalidFilename(
                "Filename must not be empty".to_string(),
            ));
        }
        if filename.contains("..") || filename.starts_with('/') || filename.contains('\\') {
            return Err(StorageError::InvalidFilename(
                "Filename contains invalid characters".to_string(),
            ));
        }

        Ok(self.root.join(filename))
    }

    /// Ensure parent directory exists
    async fn ensure_parent_dir(&self, path: &Path) -> StorageResult<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).await?;
        }
        Ok(())
    }

    /// Root directory files are stored under.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Generate the public URL for a stored file
    pub fn public_url(&self, filename: &str) -> String {
        format!("{}/{}", self.base_url.trim_end_matches('/'), filename)
    }

    /// Write the uploaded bytes to `{root}/{filename}`, creating the file or
    /// truncating an existing one, and return the public URL.
    pub async fn save(&self, filename: &str, data: Bytes) -> StorageResult<String> {
        let path = self.file_path(filename)?;
        let size = data.len();

        self.ensure_parent_dir(&path).await?;

        let start = std::time::Instant::now();

        let mut file = fs::File::create(&path).await.map_err(|e| {
            StorageError::UploadFailed(format!("Failed to create file {}: {}", path.display(), e))
        })?;

        file.write_all(&data).await.map_err(|e| {
            StorageError::UploadFailed(format!("Failed to write file {}: {}", path.display(), e))
        })?;

        file.sync_all().await.map_err(|e| {
            StorageError::UploadFailed(format!("Failed to sync file {}: {}", path.display(), e))
        })?;

        let url = self.public_url(filename);

        tracing::info!(
            path = %path.display(),
            filename = %filename,
            size_bytes = size,
            duration_ms = start.elapsed().as_secs_f64() * 1000.0,
            "Asset upload successful"
        );

        Ok(url)
    }

    /// Read a stored file back
    pub async fn read(&self, filename: &str) -> StorageResult<Vec<u8>> {
        let path = self.file_path(filename)?;

        if !fs::try_exists(&path).await.unwrap_or(false) {
            return Err(StorageError::NotFound(filename.to_string()));
        }

        let data = fs::read(&path).await.map_err(|e| {
            StorageError::DownloadFailed(format!("Failed to read file {}: {}", path.display(), e))
        })?;

        Ok(data)
    }

    /// Check if a stored file exists
    pub async fn exists(&self, filename: &str) -> StorageResult<bool> {
        let path = self.file_path(filename)?;
        Ok(fs::try_exists(&path).await.unwrap_or(false))
    }
}
