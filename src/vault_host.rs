//! Filesystem-backed host: a vault directory on disk

use std::path::PathBuf;

use async_trait::async_trait;
use serde_json::Value;

use crate::core::config::AppConfig;
use crate::core::document::Document;
use crate::core::editor::EditorState;
use crate::core::file_system;
use crate::error::HostError;
use crate::plugin::host::{Editor, Host, Registry, VaultFile};

/// File holding a plugin's saved data, inside its data directory
const DATA_FILE: &str = "data.json";

/// A notice shown to the user
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub message: String,
}

/// Host backed by a vault directory
pub struct VaultHost {
    /// Vault root
    vault_path: PathBuf,
    /// Root of per-plugin data directories
    plugin_dir: PathBuf,
    /// Lines visible in the editor viewport
    viewport_height: usize,
    /// Currently active editor
    editor: Option<EditorState>,
    /// Notices in the order they were shown
    notices: Vec<Notice>,
    registry: Registry,
}

impl VaultHost {
    /// Create a host for a vault, storing plugin data under `plugin_dir`
    pub fn new(vault_path: impl Into<PathBuf>, plugin_dir: impl Into<PathBuf>) -> Self {
        Self {
            vault_path: vault_path.into(),
            plugin_dir: plugin_dir.into(),
            viewport_height: AppConfig::default().editor.viewport_height,
            editor: None,
            notices: Vec::new(),
            registry: Registry::default(),
        }
    }

    /// Create a host using the plugin directory and editor settings from config
    pub fn from_config(vault_path: impl Into<PathBuf>, config: &AppConfig) -> Self {
        Self::new(vault_path, config.get_plugin_dir())
            .with_viewport_height(config.editor.viewport_height)
    }

    pub fn with_viewport_height(mut self, height: usize) -> Self {
        self.viewport_height = height;
        self
    }

    /// The active editor state, if a document is open
    pub fn editor(&self) -> Option<&EditorState> {
        self.editor.as_ref()
    }

    pub fn notices(&self) -> &[Notice] {
        &self.notices
    }

    /// Remove and return pending notices
    pub fn take_notices(&mut self) -> Vec<Notice> {
        std::mem::take(&mut self.notices)
    }

    fn data_path(&self, plugin_id: &str) -> PathBuf {
        self.plugin_dir.join(plugin_id).join(DATA_FILE)
    }
}

#[async_trait]
impl Host for VaultHost {
    fn list_files(&self) -> Result<Vec<VaultFile>, HostError> {
        Ok(file_system::list_vault_files(&self.vault_path)?
            .into_iter()
            .map(VaultFile::new)
            .collect())
    }

    async fn open_file(&mut self, path: &str) -> Result<(), HostError> {
        let doc = Document::open(&self.vault_path, path).await?;
        tracing::info!("Opened document: {}", doc.title());
        self.editor = Some(EditorState::new(doc, self.viewport_height));
        Ok(())
    }

    fn active_editor(&mut self) -> Option<&mut dyn Editor> {
        self.editor.as_mut().map(|e| e as &mut dyn Editor)
    }

    fn notify(&mut self, message: &str) {
        tracing::info!("Notice: {}", message);
        self.notices.push(Notice {
            message: message.to_string(),
        });
    }

    async fn load_data(&self, plugin_id: &str) -> Result<Option<Value>, HostError> {
        let path = self.data_path(plugin_id);
        match tokio::fs::read_to_string(&path).await {
            Ok(content) => Ok(Some(serde_json::from_str(&content)?)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(HostError::io(path, e)),
        }
    }

    async fn save_data(&self, plugin_id: &str, data: &Value) -> Result<(), HostError> {
        let path = self.data_path(plugin_id);
        if let Some(parent) = path.parent() {
            tokio::fs::create_dir_all(parent)
                .await
                .map_err(|e| HostError::io(parent, e))?;
        }

        let content = serde_json::to_string_pretty(data)?;
        tokio::fs::write(&path, content)
            .await
            .map_err(|e| HostError::io(&path, e))?;

        tracing::info!("Saved plugin data to: {}", path.display());
        Ok(())
    }

    fn registry(&self) -> &Registry {
        &self.registry
    }

    fn registry_mut(&mut self) -> &mut Registry {
        &mut self.registry
    }
}
