//! Data models for the songbook.
//!
//! The persisted `Song` record plus the JSON shapes exchanged with the page.

use serde::{Deserialize, Serialize};

use crate::editor::Editor;

// ============================================================================
// Core Song Type
// ============================================================================

/// One document in the collection. Serialized as `{id, title, content}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Song {
    pub id: String,
    pub title: String,
    /// Rich-text markup exactly as the editable region produced it.
    pub content: String,
}

// ============================================================================
// Editor Feedback
// ============================================================================

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Counts {
    pub words: usize,
    pub chars: usize,
}

/// Snapshot of the editor panel sent back after every editor or list action.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EditorView {
    pub open: bool,
    pub id: Option<String>,
    pub title: String,
    pub content: String,
    pub counts: Counts,
    pub font_size: u32,
    pub line_height: u32,
    /// Re-rendered list markup, present only when the list changed.
    pub list_html: Option<String>,
}

impl EditorView {
    pub fn from_editor(editor: &Editor) -> Self {
        Self {
            open: editor.is_open(),
            id: editor.current_id().map(str::to_string),
            title: editor.title().to_string(),
            content: editor.content().to_string(),
            counts: editor.counts(),
            font_size: editor.font_size().px(),
            line_height: editor.font_size().line_height(),
            list_html: None,
        }
    }

    pub fn with_list(mut self, list_html: String) -> Self {
        self.list_html = Some(list_html);
        self
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ThemeView {
    pub theme: String,
    pub label: String,
}

// ============================================================================
// Request Bodies
// ============================================================================

#[derive(Debug, Clone, Deserialize)]
pub struct TitleInput {
    pub title: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ContentInput {
    pub content: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct FontSizeInput {
    pub size: u32,
}
