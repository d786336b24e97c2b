//! Plugin API definitions

use async_trait::async_trait;
use super::host::Host;
use crate::error::HostError;

/// Plugin trait that all plugins must implement
///
/// Plugins never hold a reference to the host; each callback receives it
/// for the duration of the call.
#[async_trait]
pub trait Plugin: Send + Sync {
    /// Get the plugin manifest
    fn manifest(&self) -> &PluginManifest;

    /// Get the plugin id
    fn id(&self) -> &str {
        &self.manifest().id
    }

    /// Called when the plugin is loaded; registers commands and settings
    async fn on_load(&mut self, host: &mut dyn Host) -> anyhow::Result<()>;

    /// Called when the plugin is unloaded
    fn on_unload(&mut self) {}

    /// Run one of the commands this plugin registered
    async fn on_command(&mut self, command_id: &str, host: &mut dyn Host) -> anyhow::Result<()>;

    /// Apply a new value from the plugin's settings tab
    async fn on_setting_changed(
        &mut self,
        key: &str,
        _value: &str,
        _host: &mut dyn Host,
    ) -> anyhow::Result<()> {
        Err(HostError::UnknownSetting {
            plugin: self.id().to_string(),
            key: key.to_string(),
        }
        .into())
    }
}

/// Plugin metadata
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PluginManifest {
    /// Plugin ID
    pub id: String,
    /// Plugin name
    pub name: String,
    /// Plugin version
    pub version: String,
    /// Plugin description
    pub description: String,
    /// Plugin author
    pub author: String,
}

/// A user-invocable command provided by a plugin
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PluginCommand {
    /// Command id, unique within the plugin
    pub id: String,
    /// Display name shown in the command palette
    pub name: String,
}

impl PluginCommand {
    /// Create a new plugin command
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }
}

/// A labeled text input bound to one plugin setting
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextSetting {
    /// Key passed back to `Plugin::on_setting_changed`
    pub key: String,
    pub name: String,
    pub desc: String,
    pub placeholder: String,
    /// Current value
    pub value: String,
}

/// A plugin's settings panel
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SettingTab {
    /// Panel title
    pub name: String,
    pub settings: Vec<TextSetting>,
}

impl SettingTab {
    /// Look up a setting by key
    pub fn setting(&self, key: &str) -> Option<&TextSetting> {
        self.settings.iter().find(|s| s.key == key)
    }
}
