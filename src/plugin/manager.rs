//! Plugin manager for loading plugins and dispatching their commands

use std::collections::HashMap;

use anyhow::Result;

use super::api::Plugin;
use super::host::Host;
use crate::error::HostError;

/// Plugin manager
///
/// Owns the host so plugin callbacks can borrow it mutably one at a time.
pub struct PluginManager<H: Host> {
    /// The host application
    host: H,
    /// Loaded plugins by id
    plugins: HashMap<String, Box<dyn Plugin>>,
}

impl<H: Host> PluginManager<H> {
    /// Create a new plugin manager
    pub fn new(host: H) -> Self {
        Self {
            host,
            plugins: HashMap::new(),
        }
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    /// Load a plugin; a plugin with the same id is loaded only once
    pub async fn load(&mut self, mut plugin: Box<dyn Plugin>) -> Result<()> {
        let id = plugin.id().to_string();
        if self.plugins.contains_key(&id) {
            return Ok(());
        }

        plugin.on_load(&mut self.host).await?;
        tracing::info!(
            "Loaded plugin: {} v{}",
            plugin.manifest().name,
            plugin.manifest().version
        );
        self.plugins.insert(id, plugin);
        Ok(())
    }

    /// Unload a plugin and drop everything it registered
    pub fn unload(&mut self, id: &str) {
        if let Some(mut plugin) = self.plugins.remove(id) {
            plugin.on_unload();
            self.host.registry_mut().remove_plugin(id);
            tracing::info!("Unloaded plugin: {}", id);
        }
    }

    pub fn unload_all(&mut self) {
        let ids: Vec<String> = self.plugins.keys().cloned().collect();
        for id in ids {
            self.unload(&id);
        }
    }

    /// Execute a registered command by namespaced or bare id
    pub async fn execute_command(&mut self, id: &str) -> Result<()> {
        let registered = self.host.registry().find_command(id)?.clone();
        let plugin = self
            .plugins
            .get_mut(&registered.plugin_id)
            .ok_or_else(|| HostError::UnknownPlugin(registered.plugin_id.clone()))?;

        tracing::debug!("Executing command {}", registered.full_id());
        plugin
            .on_command(&registered.command.id, &mut self.host)
            .await
    }

    /// Forward a settings panel change to the owning plugin
    pub async fn update_setting(&mut self, plugin_id: &str, key: &str, value: &str) -> Result<()> {
        let plugin = self
            .plugins
            .get_mut(plugin_id)
            .ok_or_else(|| HostError::UnknownPlugin(plugin_id.to_string()))?;

        plugin.on_setting_changed(key, value, &mut self.host).await
    }

    pub fn plugin_count(&self) -> usize {
        self.plugins.len()
    }
}
