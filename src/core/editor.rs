//! Editor state: document text, cursor and viewport

use crate::core::document::Document;

/// A zero-indexed position in the editor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct EditorPosition {
    pub line: usize,
    pub ch: usize,
}

impl EditorPosition {
    pub fn new(line: usize, ch: usize) -> Self {
        Self { line, ch }
    }
}

/// A range of editor positions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EditorRange {
    pub from: EditorPosition,
    pub to: EditorPosition,
}

impl EditorRange {
    /// A zero-width range at a single position
    pub fn at(pos: EditorPosition) -> Self {
        Self { from: pos, to: pos }
    }
}

/// Editable view over an open document
#[derive(Debug, Clone)]
pub struct EditorState {
    /// Document being edited
    pub document: Document,
    /// Cursor position
    cursor: EditorPosition,
    /// First visible line
    scroll_top: usize,
    /// Number of visible lines
    viewport_height: usize,
}

impl EditorState {
    /// Create an editor with the cursor at the top of the document
    pub fn new(document: Document, viewport_height: usize) -> Self {
        Self {
            document,
            cursor: EditorPosition::default(),
            scroll_top: 0,
            viewport_height: viewport_height.max(1),
        }
    }

    /// Full document text
    pub fn text(&self) -> &str {
        &self.document.content
    }

    /// Number of lines, counting a trailing empty line after a final newline
    pub fn line_count(&self) -> usize {
        self.document.content.split('\n').count()
    }

    /// Text of a single line
    pub fn line(&self, idx: usize) -> Option<&str> {
        self.document.content.split('\n').nth(idx)
    }

    pub fn cursor(&self) -> EditorPosition {
        self.cursor
    }

    pub fn scroll_top(&self) -> usize {
        self.scroll_top
    }

    /// Range of visible line indices
    pub fn visible_lines(&self) -> std::ops::Range<usize> {
        let end = (self.scroll_top + self.viewport_height).min(self.line_count());
        self.scroll_top..end
    }

    /// Move the cursor, clamping to the document
    pub fn set_cursor(&mut self, pos: EditorPosition) {
        let line = pos.line.min(self.line_count().saturating_sub(1));
        let max_ch = self.line(line).map(|l| l.chars().count()).unwrap_or(0);
        self.cursor = EditorPosition::new(line, pos.ch.min(max_ch));
    }

    /// Scroll so the range is visible, centering it when `center` is set
    pub fn scroll_into_view(&mut self, range: EditorRange, center: bool) {
        let max_top = self.line_count().saturating_sub(self.viewport_height);

        let top = if center {
            let mid = (range.from.line + range.to.line) / 2;
            mid.saturating_sub(self.viewport_height / 2)
        } else if range.from.line < self.scroll_top {
            range.from.line
        } else if range.to.line >= self.scroll_top + self.viewport_height {
            range.to.line + 1 - self.viewport_height
        } else {
            self.scroll_top
        };

        self.scroll_top = top.min(max_top);
    }
}
