//! Random daily note plugin
//!
//! Registers one command that opens a random note from the configured
//! daily notes folder and jumps to a random `## ` heading in it, plus a
//! settings tab for choosing that folder.

pub mod navigator;
pub mod picker;
pub mod settings;

use anyhow::Result;
use async_trait::async_trait;

use crate::error::HostError;
use crate::plugin::api::{Plugin, PluginCommand, PluginManifest, SettingTab, TextSetting};
use crate::plugin::host::Host;

pub use navigator::{Heading, Outcome};
pub use picker::{IndexPicker, SeededPicker, ThreadRngPicker};
pub use settings::Settings;

pub const PLUGIN_ID: &str = "random-daily-note";
pub const OPEN_COMMAND_ID: &str = "open-random-daily-note";
pub const FOLDER_SETTING_KEY: &str = "dailyNotesFolder";

/// The random daily note plugin
pub struct RandomNotePlugin {
    manifest: PluginManifest,
    settings: Settings,
    picker: Box<dyn IndexPicker>,
}

impl Default for RandomNotePlugin {
    fn default() -> Self {
        Self::new()
    }
}

impl RandomNotePlugin {
    /// Create the plugin with a uniform random source
    pub fn new() -> Self {
        Self::with_picker(Box::new(ThreadRngPicker))
    }

    /// Create the plugin with a specific random source
    pub fn with_picker(picker: Box<dyn IndexPicker>) -> Self {
        Self {
            manifest: PluginManifest {
                id: PLUGIN_ID.to_string(),
                name: "Random Daily Note".to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
                description: "Open a random daily note at a random heading".to_string(),
                author: "Robsidian Contributors".to_string(),
            },
            settings: Settings::default(),
            picker,
        }
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Build the settings panel for the current values
    pub fn setting_tab(&self) -> SettingTab {
        SettingTab {
            name: self.manifest.name.clone(),
            settings: vec![TextSetting {
                key: FOLDER_SETTING_KEY.to_string(),
                name: "Daily Notes Folder".to_string(),
                desc: "The folder where your daily notes are stored.".to_string(),
                placeholder: settings::DEFAULT_DAILY_NOTES_FOLDER.to_string(),
                value: self.settings.daily_notes_folder.clone(),
            }],
        }
    }

    /// Run the navigation against the current settings
    pub async fn open_random_daily_note(&mut self, host: &mut dyn Host) -> Result<Outcome, HostError> {
        navigator::open_random_daily_note(
            host,
            &self.settings.daily_notes_folder,
            self.picker.as_mut(),
        )
        .await
    }
}

#[async_trait]
impl Plugin for RandomNotePlugin {
    fn manifest(&self) -> &PluginManifest {
        &self.manifest
    }

    async fn on_load(&mut self, host: &mut dyn Host) -> Result<()> {
        self.settings = Settings::load(host, PLUGIN_ID).await?;
        tracing::debug!("Loaded settings: {:?}", self.settings);

        host.register_command(
            PLUGIN_ID,
            PluginCommand::new(OPEN_COMMAND_ID, "Open Random Daily Note"),
        );
        host.register_setting_tab(PLUGIN_ID, self.setting_tab());
        Ok(())
    }

    async fn on_command(&mut self, command_id: &str, host: &mut dyn Host) -> Result<()> {
        match command_id {
            OPEN_COMMAND_ID => {
                self.open_random_daily_note(host).await?;
                Ok(())
            }
            other => Err(HostError::UnknownCommand(other.to_string()).into()),
        }
    }

    async fn on_setting_changed(&mut self, key: &str, value: &str, host: &mut dyn Host) -> Result<()> {
        if key != FOLDER_SETTING_KEY {
            return Err(HostError::UnknownSetting {
                plugin: PLUGIN_ID.to_string(),
                key: key.to_string(),
            }
            .into());
        }

        self.settings
            .set_daily_notes_folder(value, host, PLUGIN_ID)
            .await?;
        host.register_setting_tab(PLUGIN_ID, self.setting_tab());
        Ok(())
    }
}
