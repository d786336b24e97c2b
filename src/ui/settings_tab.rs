//! Plain-text settings panel

use crate::plugin::api::SettingTab;

/// Settings panel renderer
pub struct SettingsPanel;

impl SettingsPanel {
    /// Render a plugin's settings tab
    pub fn render(tab: &SettingTab) -> String {
        let mut lines = vec![
            tab.name.clone(),
            "=".repeat(tab.name.chars().count()),
        ];

        for setting in &tab.settings {
            lines.push(String::new());
            lines.push(format!("{} ({})", setting.name, setting.key));
            if !setting.desc.is_empty() {
                lines.push(format!("  {}", setting.desc));
            }
            lines.push(if setting.value.is_empty() {
                format!("  [ {} ]", setting.placeholder)
            } else {
                format!("  [{}]", setting.value)
            });
        }

        let mut out = lines.join("\n");
        out.push('\n');
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::plugin::api::TextSetting;

    fn tab(value: &str) -> SettingTab {
        SettingTab {
            name: "Random Daily Note".into(),
            settings: vec![TextSetting {
                key: "dailyNotesFolder".into(),
                name: "Daily Notes Folder".into(),
                desc: "The folder where your daily notes are stored.".into(),
                placeholder: "Daily".into(),
                value: value.into(),
            }],
        }
    }

    #[test]
    fn test_render_with_value() {
        let out = SettingsPanel::render(&tab("Journal"));
        assert!(out.starts_with("Random Daily Note\n=================\n"));
        assert!(out.contains("Daily Notes Folder (dailyNotesFolder)"));
        assert!(out.contains("  The folder where your daily notes are stored."));
        assert!(out.contains("  [Journal]"));
    }

    #[test]
    fn test_render_shows_placeholder_when_empty() {
        let out = SettingsPanel::render(&tab(""));
        assert!(out.contains("  [ Daily ]"));
    }

    #[test]
    fn test_render_layout() {
        let mut panel = tab("");
        panel.settings[0].desc.clear();
        assert_eq!(
            SettingsPanel::render(&panel),
            "Random Daily Note\n=================\n\nDaily Notes Folder (dailyNotesFolder)\n  [ Daily ]\n"
        );
    }
}
