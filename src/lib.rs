//! Random Daily - open a random daily note at a random heading
//!
//! A vault plugin plus a small filesystem-backed host to run it:
//! - Plugin API and host capabilities (`plugin`)
//! - The random daily note plugin (`random_note`)
//! - Vault scanning, documents, editor state and configuration (`core`)
//! - A host over a vault directory (`vault_host`)

pub mod core;
pub mod error;
pub mod plugin;
pub mod random_note;
pub mod ui;
pub mod vault_host;

pub use error::HostError;
pub use plugin::{Host, Plugin, PluginManager};
pub use random_note::RandomNotePlugin;
pub use vault_host::VaultHost;
