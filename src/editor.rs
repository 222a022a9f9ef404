//! Editor panel state.
//!
//! Holds the title and body fields, the live counts, the font size, and which
//! song (if any) backs the fields. It never touches storage; `Songbook` decides
//! when the fields become a stored song.

use crate::models::{Counts, Song};
use crate::songs::{count_text, plain_text, UNTITLED};

/// Sizes offered by the font-size selector, in px.
pub const FONT_SIZES: &[u32] = &[12, 14, 16, 18, 20, 24, 28, 32];
pub const DEFAULT_FONT_SIZE: u32 = 16;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FontSize(u32);

impl FontSize {
    /// `None` for sizes the selector does not offer.
    pub fn new(px: u32) -> Option<Self> {
        FONT_SIZES.contains(&px).then_some(Self(px))
    }

    pub fn px(self) -> u32 {
        self.0
    }

    pub fn line_height(self) -> u32 {
        self.0 + 8
    }
}

impl Default for FontSize {
    fn default() -> Self {
        Self(DEFAULT_FONT_SIZE)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum EditorState {
    #[default]
    Closed,
    /// Opened with "new"; nothing stored yet.
    OpenNewUnsaved,
    OpenExisting {
        id: String,
    },
}

#[derive(Debug, Clone, Default)]
pub struct Editor {
    state: EditorState,
    title: String,
    content: String,
    counts: Counts,
    font_size: FontSize,
}

impl Editor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &EditorState {
        &self.state
    }

    pub fn is_open(&self) -> bool {
        self.state != EditorState::Closed
    }

    pub fn current_id(&self) -> Option<&str> {
        match &self.state {
            EditorState::OpenExisting { id } => Some(id.as_str()),
            _ => None,
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn counts(&self) -> Counts {
        self.counts
    }

    pub fn font_size(&self) -> FontSize {
        self.font_size
    }

    pub fn set_font_size(&mut self, size: FontSize) {
        self.font_size = size;
    }

    pub fn open(&mut self, song: &Song) {
        self.state = EditorState::OpenExisting {
            id: song.id.clone(),
        };
        self.title = song.title.clone();
        self.content = song.content.clone();
        self.update_counts();
    }

    pub fn open_new(&mut self) {
        self.state = EditorState::OpenNewUnsaved;
        self.title = UNTITLED.to_string();
        self.content.clear();
        self.update_counts();
    }

    pub fn close(&mut self) {
        self.state = EditorState::Closed;
    }

    pub fn set_title(&mut self, title: &str) {
        self.title = title.to_string();
    }

    pub fn set_content(&mut self, content: &str) {
        self.content = content.to_string();
        self.update_counts();
    }

    pub fn update_counts(&mut self) -> Counts {
        self.counts = count_text(&self.content);
        self.counts
    }

    /// Whether the fields hold something worth storing: body text, or a title
    /// other than the placeholder.
    pub fn is_substantive(&self) -> bool {
        !plain_text(&self.content).trim().is_empty() || self.title.trim() != UNTITLED
    }

    /// True when an unsaved "new" editor should become a stored song.
    pub fn needs_materialization(&self) -> bool {
        self.state == EditorState::OpenNewUnsaved && self.is_substantive()
    }

    /// Binds the unsaved fields to the freshly created song `id`.
    pub fn materialized(&mut self, id: String) {
        self.state = EditorState::OpenExisting { id };
    }

    /// Closes the panel if it shows song `id`. Returns whether it did.
    pub fn detach(&mut self, id: &str) -> bool {
        if self.current_id() == Some(id) {
            self.close();
            true
        } else {
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn song() -> Song {
        Song {
            id: "42".to_string(),
            title: "Blue".to_string(),
            content: "la la <b>la</b>".to_string(),
        }
    }

    #[test]
    fn test_initially_closed() {
        let editor = Editor::new();
        assert_eq!(editor.state(), &EditorState::Closed);
        assert!(!editor.is_open());
        assert_eq!(editor.current_id(), None);
    }

    #[test]
    fn test_open_existing_loads_fields_and_counts() {
        let mut editor = Editor::new();
        editor.open(&song());
        assert_eq!(editor.current_id(), Some("42"));
        assert_eq!(editor.title(), "Blue");
        assert_eq!(editor.counts(), Counts { words: 3, chars: 8 });
    }

    #[test]
    fn test_open_new_resets_fields() {
        let mut editor = Editor::new();
        editor.open(&song());
        editor.open_new();
        assert_eq!(editor.state(), &EditorState::OpenNewUnsaved);
        assert_eq!(editor.title(), UNTITLED);
        assert_eq!(editor.content(), "");
        assert_eq!(editor.counts(), Counts::default());
        assert!(!editor.needs_materialization());
    }

    #[test]
    fn test_materialization_rules() {
        let mut editor = Editor::new();
        editor.open_new();

        editor.set_title("  Untitled ");
        assert!(!editor.needs_materialization());

        editor.set_content("<br>&nbsp;");
        assert!(!editor.needs_materialization());

        editor.set_content("x");
        assert!(editor.needs_materialization());

        editor.set_content("");
        editor.set_title("Chorus");
        assert!(editor.needs_materialization());

        editor.materialized("7".to_string());
        assert_eq!(editor.current_id(), Some("7"));
        assert!(!editor.needs_materialization());
    }

    #[test]
    fn test_closed_never_materializes() {
        let mut editor = Editor::new();
        editor.set_title("Chorus");
        assert!(!editor.needs_materialization());
    }

    #[test]
    fn test_close_and_reopen() {
        let mut editor = Editor::new();
        editor.open(&song());
        editor.close();
        assert_eq!(editor.current_id(), None);
        editor.open(&song());
        assert_eq!(editor.current_id(), Some("42"));
    }

    #[test]
    fn test_detach() {
        let mut editor = Editor::new();
        editor.open(&song());
        assert!(!editor.detach("other"));
        assert!(editor.is_open());
        assert!(editor.detach("42"));
        assert!(!editor.is_open());
    }

    #[test]
    fn test_font_size() {
        assert_eq!(FontSize::default().px(), 16);
        assert_eq!(FontSize::new(20).unwrap().line_height(), 28);
        assert!(FontSize::new(17).is_none());
    }
}
