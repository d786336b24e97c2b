//! Error types surfaced by the plugin host

use std::path::PathBuf;

use thiserror::Error;

/// Errors produced by host capabilities and the plugin registry
#[derive(Debug, Error)]
pub enum HostError {
    /// Filesystem failure while reading or writing vault data
    #[error("I/O error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Stored plugin data could not be encoded or decoded
    #[error("invalid plugin data: {0}")]
    Json(#[from] serde_json::Error),

    /// The requested vault file does not exist
    #[error("file not found in vault: {0}")]
    FileNotFound(String),

    /// No registered command matches the given id
    #[error("unknown command: {0}")]
    UnknownCommand(String),

    /// A bare command id is registered by more than one plugin
    #[error("ambiguous command id, use <plugin-id>:<command-id>: {0}")]
    AmbiguousCommand(String),

    /// No loaded plugin matches the given id
    #[error("unknown plugin: {0}")]
    UnknownPlugin(String),

    /// The plugin exposes no setting under this key
    #[error("plugin {plugin} has no setting named {key}")]
    UnknownSetting { plugin: String, key: String },
}

impl HostError {
    /// Wrap an I/O error with the path it occurred on
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
