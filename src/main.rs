//! Random Daily - open a random daily note at a random heading
//!
//! Runs the random daily note plugin against a vault directory.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use random_daily::core::config::AppConfig;
use random_daily::plugin::{Host, PluginManager};
use random_daily::random_note::{
    self, navigator, IndexPicker, RandomNotePlugin, SeededPicker, ThreadRngPicker,
};
use random_daily::ui::{EditorView, SettingsPanel};
use random_daily::VaultHost;

/// Open a random daily note at a random heading
#[derive(Parser, Debug)]
#[command(name = "random-daily")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Vault directory (defaults to the last used vault)
    #[arg(long, value_name = "DIR")]
    vault: Option<PathBuf>,

    /// Config file (defaults to the platform config directory)
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Seed for a reproducible choice of note and heading
    #[arg(long)]
    seed: Option<u64>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Open a random daily note (default)
    Open,
    /// List notes in the daily notes folder
    List,
    /// Show or change plugin settings
    Settings {
        #[command(subcommand)]
        action: Option<SettingsAction>,
    },
}

#[derive(Subcommand, Debug)]
enum SettingsAction {
    /// Show the settings panel
    Show,
    /// Set the daily notes folder
    SetFolder {
        /// Folder path relative to the vault, without trailing slash
        value: String,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(tracing_subscriber::filter::LevelFilter::INFO)
        .init();

    let args = Args::parse();

    let mut config = match &args.config {
        Some(path) => AppConfig::load_from(path),
        None => AppConfig::load(),
    }
    .context("Failed to load configuration")?;

    let vault = match args.vault.clone() {
        Some(path) => {
            let path = path
                .canonicalize()
                .with_context(|| format!("Vault not found: {}", path.display()))?;
            remember_vault(&mut config, args.config.as_deref(), path.clone());
            path
        }
        None => config
            .last_vault
            .clone()
            .context("No vault given; pass --vault DIR")?,
    };
    tracing::info!("Using vault: {}", vault.display());

    let picker: Box<dyn IndexPicker> = match args.seed {
        Some(seed) => Box::new(SeededPicker::new(seed)),
        None => Box::new(ThreadRngPicker),
    };

    let host = VaultHost::from_config(&vault, &config);
    let mut manager = PluginManager::new(host);
    manager
        .load(Box::new(RandomNotePlugin::with_picker(picker)))
        .await
        .context("Failed to load plugin")?;

    match args.command.unwrap_or(Command::Open) {
        Command::Open => {
            manager
                .execute_command(random_note::OPEN_COMMAND_ID)
                .await
                .context("Failed to open a random daily note")?;
            print_notices(manager.host_mut());

            if let Some(editor) = manager.host().editor() {
                println!("{}", editor.document.path);
                print!("{}", EditorView::render(editor));
            }
        }
        Command::List => {
            let folder = current_folder(&manager);
            let files = manager.host().list_files()?;
            for file in navigator::collect_candidates(&files, &folder) {
                println!("{}", file.path);
            }
        }
        Command::Settings { action } => {
            if let Some(SettingsAction::SetFolder { value }) = action {
                manager
                    .update_setting(random_note::PLUGIN_ID, random_note::FOLDER_SETTING_KEY, &value)
                    .await
                    .context("Failed to save settings")?;
            }
            if let Some(tab) = manager.host().registry().setting_tab(random_note::PLUGIN_ID) {
                print!("{}", SettingsPanel::render(tab));
            }
        }
    }

    manager.unload_all();
    Ok(())
}

/// Record the vault in config; failure to save is not fatal
fn remember_vault(config: &mut AppConfig, path: Option<&std::path::Path>, vault: PathBuf) {
    config.add_recent_vault(vault);
    let saved = match path {
        Some(path) => config.save_to(path),
        None => config.save(),
    };
    if let Err(e) = saved {
        tracing::warn!("Failed to save config: {}", e);
    }
}

/// The folder value currently shown in the plugin's settings tab
fn current_folder(manager: &PluginManager<VaultHost>) -> String {
    manager
        .host()
        .registry()
        .setting_tab(random_note::PLUGIN_ID)
        .and_then(|tab| tab.setting(random_note::FOLDER_SETTING_KEY))
        .map(|s| s.value.clone())
        .unwrap_or_else(|| random_note::settings::DEFAULT_DAILY_NOTES_FOLDER.to_string())
}

fn print_notices(host: &mut VaultHost) {
    for notice in host.take_notices() {
        println!("{}", notice.message);
    }
}
