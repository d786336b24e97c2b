//! Plugin API, host capabilities and plugin management

pub mod api;
pub mod host;
pub mod manager;

#[cfg(test)]
pub(crate) mod testing;

pub use api::{Plugin, PluginCommand, PluginManifest, SettingTab, TextSetting};
pub use host::{Editor, Host, Registry, VaultFile};
pub use manager::PluginManager;
