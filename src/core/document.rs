//! Document management for vault notes

use std::path::Path;
use std::time::SystemTime;

use crate::error::HostError;

/// A note opened from the vault
#[derive(Debug, Clone)]
pub struct Document {
    /// Vault-relative path, `/`-separated
    pub path: String,
    /// Document content
    pub content: String,
    /// Last modification time
    pub last_modified: Option<SystemTime>,
}

impl Document {
    /// Create a document from in-memory content
    pub fn new(path: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            content: content.into(),
            last_modified: None,
        }
    }

    /// Open a document by its vault-relative path
    pub async fn open(vault_root: &Path, path: &str) -> Result<Self, HostError> {
        let full_path = vault_root.join(path);

        let content = match tokio::fs::read_to_string(&full_path).await {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return Err(HostError::FileNotFound(path.to_string()));
            }
            Err(e) => return Err(HostError::io(full_path, e)),
        };

        let last_modified = tokio::fs::metadata(&full_path)
            .await
            .ok()
            .and_then(|m| m.modified().ok());

        Ok(Self {
            path: path.to_string(),
            content,
            last_modified,
        })
    }

    /// Get the document title (file name without extension)
    pub fn title(&self) -> &str {
        let name = self.path.rsplit('/').next().unwrap_or(&self.path);
        match name.rfind('.') {
            Some(0) | None => name,
            Some(idx) => &name[..idx],
        }
    }
}
