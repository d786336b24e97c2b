//! Persisted settings for the random daily note plugin

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::HostError;
use crate::plugin::host::Host;

/// Folder used when nothing has been saved yet
pub const DEFAULT_DAILY_NOTES_FOLDER: &str = "Daily";

/// Plugin settings
///
/// Stored objects missing a key fall back to the default for that key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Settings {
    /// Vault folder holding the daily notes, without trailing slash
    pub daily_notes_folder: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            daily_notes_folder: DEFAULT_DAILY_NOTES_FOLDER.to_string(),
        }
    }
}

impl Settings {
    /// Load stored settings merged over the defaults
    ///
    /// Missing or `null` stored data yields the defaults.
    pub async fn load(host: &dyn Host, plugin_id: &str) -> Result<Self, HostError> {
        match host.load_data(plugin_id).await? {
            Some(Value::Null) | None => Ok(Self::default()),
            Some(data) => Ok(serde_json::from_value(data)?),
        }
    }

    /// Persist the current settings
    pub async fn save(&self, host: &dyn Host, plugin_id: &str) -> Result<(), HostError> {
        let data = serde_json::to_value(self)?;
        host.save_data(plugin_id, &data).await
    }

    /// Update the folder and persist the change
    pub async fn set_daily_notes_folder(
        &mut self,
        folder: impl Into<String>,
        host: &dyn Host,
        plugin_id: &str,
    ) -> Result<(), HostError> {
        self.daily_notes_folder = folder.into();
        tracing::debug!("Daily notes folder set to {:?}", self.daily_notes_folder);
        self.save(host, plugin_id).await
    }
}
