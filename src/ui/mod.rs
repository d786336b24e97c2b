//! Text rendering for the command-line front end

pub mod editor_view;
pub mod settings_tab;

pub use editor_view::EditorView;
pub use settings_tab::SettingsPanel;
