//! Capabilities the host application offers to plugins

use async_trait::async_trait;
use serde_json::Value;

use super::api::{PluginCommand, SettingTab};
use crate::core::editor::{EditorPosition, EditorRange, EditorState};
use crate::error::HostError;

/// A file known to the host, addressed by its vault-relative path
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct VaultFile {
    pub path: String,
}

impl VaultFile {
    pub fn new(path: impl Into<String>) -> Self {
        Self { path: path.into() }
    }
}

/// An editable view over the active document
pub trait Editor: Send + Sync {
    /// Full text of the document
    fn value(&self) -> String;

    /// Move the cursor
    fn set_cursor(&mut self, pos: EditorPosition);

    /// Scroll the range into the viewport
    fn scroll_into_view(&mut self, range: EditorRange, center: bool);
}

impl Editor for EditorState {
    fn value(&self) -> String {
        self.text().to_string()
    }

    fn set_cursor(&mut self, pos: EditorPosition) {
        EditorState::set_cursor(self, pos);
    }

    fn scroll_into_view(&mut self, range: EditorRange, center: bool) {
        EditorState::scroll_into_view(self, range, center);
    }
}

/// The host application, as seen by a plugin
#[async_trait]
pub trait Host: Send + Sync {
    /// List every file in the vault
    fn list_files(&self) -> Result<Vec<VaultFile>, HostError>;

    /// Open a file and make it the active editor
    async fn open_file(&mut self, path: &str) -> Result<(), HostError>;

    /// The active editor, if any document is open
    fn active_editor(&mut self) -> Option<&mut dyn Editor>;

    /// Show a transient notice to the user
    fn notify(&mut self, message: &str);

    /// Load a plugin's stored data; `None` when nothing was saved yet
    async fn load_data(&self, plugin_id: &str) -> Result<Option<Value>, HostError>;

    /// Persist a plugin's data
    async fn save_data(&self, plugin_id: &str, data: &Value) -> Result<(), HostError>;

    fn registry(&self) -> &Registry;

    fn registry_mut(&mut self) -> &mut Registry;

    /// Expose a command through the command palette
    fn register_command(&mut self, plugin_id: &str, command: PluginCommand) {
        self.registry_mut().add_command(plugin_id, command);
    }

    /// Register (or replace) the plugin's settings panel
    fn register_setting_tab(&mut self, plugin_id: &str, tab: SettingTab) {
        self.registry_mut().set_setting_tab(plugin_id, tab);
    }
}

/// A command together with the plugin that owns it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegisteredCommand {
    pub plugin_id: String,
    pub command: PluginCommand,
}

impl RegisteredCommand {
    /// Namespaced id, `<plugin-id>:<command-id>`
    pub fn full_id(&self) -> String {
        format!("{}:{}", self.plugin_id, self.command.id)
    }
}

/// Commands and settings panels registered by plugins
#[derive(Debug, Clone, Default)]
pub struct Registry {
    commands: Vec<RegisteredCommand>,
    setting_tabs: Vec<(String, SettingTab)>,
}

impl Registry {
    /// Add a command, replacing one with the same namespaced id
    pub fn add_command(&mut self, plugin_id: &str, command: PluginCommand) {
        self.commands
            .retain(|c| !(c.plugin_id == plugin_id && c.command.id == command.id));
        tracing::debug!("Registered command {}:{}", plugin_id, command.id);
        self.commands.push(RegisteredCommand {
            plugin_id: plugin_id.to_string(),
            command,
        });
    }

    pub fn set_setting_tab(&mut self, plugin_id: &str, tab: SettingTab) {
        match self.setting_tabs.iter_mut().find(|(id, _)| id == plugin_id) {
            Some((_, existing)) => *existing = tab,
            None => self.setting_tabs.push((plugin_id.to_string(), tab)),
        }
    }

    pub fn commands(&self) -> &[RegisteredCommand] {
        &self.commands
    }

    pub fn setting_tab(&self, plugin_id: &str) -> Option<&SettingTab> {
        self.setting_tabs
            .iter()
            .find(|(id, _)| id == plugin_id)
            .map(|(_, tab)| tab)
    }

    /// Resolve a command by namespaced id, or by bare id when only one plugin uses it
    pub fn find_command(&self, id: &str) -> Result<&RegisteredCommand, HostError> {
        if let Some(cmd) = self.commands.iter().find(|c| c.full_id() == id) {
            return Ok(cmd);
        }

        let mut matches = self.commands.iter().filter(|c| c.command.id == id);
        match (matches.next(), matches.next()) {
            (Some(cmd), None) => Ok(cmd),
            (Some(_), Some(_)) => Err(HostError::AmbiguousCommand(id.to_string())),
            _ => Err(HostError::UnknownCommand(id.to_string())),
        }
    }

    /// Drop everything a plugin registered
    pub fn remove_plugin(&mut self, plugin_id: &str) {
        self.commands.retain(|c| c.plugin_id != plugin_id);
        self.setting_tabs.retain(|(id, _)| id != plugin_id);
    }
}
