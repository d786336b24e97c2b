//! In-memory host double for plugin tests

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;
use serde_json::Value;

use super::host::{Editor, Host, Registry, VaultFile};
use crate::core::editor::{EditorPosition, EditorRange};
use crate::error::HostError;

/// Editor that records every call made to it
#[derive(Debug, Default)]
pub struct MockEditor {
    pub text: String,
    pub cursor_calls: Vec<EditorPosition>,
    pub scroll_calls: Vec<(EditorRange, bool)>,
}

impl Editor for MockEditor {
    fn value(&self) -> String {
        self.text.clone()
    }

    fn set_cursor(&mut self, pos: EditorPosition) {
        self.cursor_calls.push(pos);
    }

    fn scroll_into_view(&mut self, range: EditorRange, center: bool) {
        self.scroll_calls.push((range, center));
    }
}

#[derive(Debug, Default)]
pub struct MockHost {
    pub files: Vec<VaultFile>,
    pub contents: HashMap<String, String>,
    pub opened: Vec<String>,
    pub editor: Option<MockEditor>,
    pub notices: Vec<String>,
    pub data: Mutex<HashMap<String, Value>>,
    pub save_count: Mutex<usize>,
    pub fail_open: bool,
    /// Leave no active editor after opening
    pub no_editor: bool,
    pub registry: Registry,
}

impl MockHost {
    /// Host with the given files; each file's content is set per entry
    pub fn with_files(files: &[(&str, &str)]) -> Self {
        Self {
            files: files.iter().map(|(p, _)| VaultFile::new(*p)).collect(),
            contents: files
                .iter()
                .map(|(p, c)| (p.to_string(), c.to_string()))
                .collect(),
            ..Default::default()
        }
    }

    pub fn stored(&self, plugin_id: &str) -> Option<Value> {
        self.data.lock().unwrap().get(plugin_id).cloned()
    }

    pub fn saves(&self) -> usize {
        *self.save_count.lock().unwrap()
    }

    pub fn cursor_calls(&self) -> &[EditorPosition] {
        self.editor
            .as_ref()
            .map(|e| e.cursor_calls.as_slice())
            .unwrap_or(&[])
    }
}

#[async_trait]
impl Host for MockHost {
    fn list_files(&self) -> Result<Vec<VaultFile>, HostError> {
        Ok(self.files.clone())
    }

    async fn open_file(&mut self, path: &str) -> Result<(), HostError> {
        if self.fail_open {
            return Err(HostError::FileNotFound(path.to_string()));
        }
        let text = self
            .contents
            .get(path)
            .cloned()
            .ok_or_else(|| HostError::FileNotFound(path.to_string()))?;
        self.opened.push(path.to_string());
        if !self.no_editor {
            self.editor = Some(MockEditor {
                text,
                ..Default::default()
            });
        }
        Ok(())
    }

    fn active_editor(&mut self) -> Option<&mut dyn Editor> {
        self.editor.as_mut().map(|e| e as &mut dyn Editor)
    }

    fn notify(&mut self, message: &str) {
        self.notices.push(message.to_string());
    }

    async fn load_data(&self, plugin_id: &str) -> Result<Option<Value>, HostError> {
        Ok(self.stored(plugin_id))
    }

    async fn save_data(&self, plugin_id: &str, data: &Value) -> Result<(), HostError> {
        self.data
            .lock()
            .unwrap()
            .insert(plugin_id.to_string(), data.clone());
        *self.save_count.lock().unwrap() += 1;
        Ok(())
    }

    fn registry(&self) -> &Registry {
        &self.registry
    }

    fn registry_mut(&mut self) -> &mut Registry {
        &mut self.registry
    }
}
