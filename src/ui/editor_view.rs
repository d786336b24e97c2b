//! Plain-text view of the editor viewport

use crate::core::editor::EditorState;

/// Editor viewport renderer
pub struct EditorView;

impl EditorView {
    /// Render visible lines with 1-based line numbers, marking the cursor line
    pub fn render(editor: &EditorState) -> String {
        let mut out = String::new();
        let cursor = editor.cursor();
        let width = editor.line_count().to_string().len();

        for idx in editor.visible_lines() {
            let marker = if idx == cursor.line { '>' } else { ' ' };
            let text = editor.line(idx).unwrap_or_default().trim_end_matches('\r');
            out.push_str(&format!("{marker} {:>width$} | {text}\n", idx + 1));
        }

        out
    }
}
