//! The application state: the stored collection, the editor panel, the theme
//! and the list query, owned together and mutated one event at a time.

use tracing::{debug, info};

use crate::editor::{Editor, FontSize};
use crate::error::Result;
use crate::export::{export_song, Export, ExportFormat};
use crate::models::Song;
use crate::songs::search_songs;
use crate::store::{SongField, SongStore, Storage};
use crate::theme::{Theme, ThemeController};

/// What an input event changed, so the caller knows what to re-render.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InputOutcome {
    /// A new song was created from the unsaved editor.
    pub materialized: bool,
    pub list_changed: bool,
}

pub struct Songbook {
    store: SongStore,
    editor: Editor,
    theme: ThemeController,
    query: String,
}

impl Songbook {
    pub fn load(storage: Storage) -> Self {
        Self {
            store: SongStore::load(storage.clone()),
            editor: Editor::new(),
            theme: ThemeController::restore(storage),
            query: String::new(),
        }
    }

    pub fn store(&self) -> &SongStore {
        &self.store
    }

    pub fn editor(&self) -> &Editor {
        &self.editor
    }

    pub fn theme(&self) -> Theme {
        self.theme.theme()
    }

    // ------------------------------------------------------------------------
    // List
    // ------------------------------------------------------------------------

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn set_query(&mut self, query: &str) {
        self.query = query.to_string();
    }

    /// Songs matching the current query.
    pub fn visible_songs(&self) -> Vec<&Song> {
        search_songs(self.store.songs(), &self.query)
    }

    pub fn delete_song(&mut self, id: &str) -> Result<bool> {
        let removed = self.store.delete(id)?.is_some();
        if removed {
            self.editor.detach(id);
        }
        Ok(removed)
    }

    // ------------------------------------------------------------------------
    // Editor
    // ------------------------------------------------------------------------

    /// Opens song `id`. Unknown ids leave everything as it was.
    pub fn open_song(&mut self, id: &str) -> bool {
        match self.store.find_by_id(id) {
            Some(song) => {
                self.editor.open(song);
                true
            }
            None => {
                debug!(id = %id, "open ignored, no such song");
                false
            }
        }
    }

    pub fn new_song(&mut self) {
        self.editor.open_new();
    }

    pub fn close_editor(&mut self) {
        self.editor.close();
    }

    pub fn set_font_size(&mut self, px: u32) -> bool {
        match FontSize::new(px) {
            Some(size) => {
                self.editor.set_font_size(size);
                true
            }
            None => false,
        }
    }

    pub fn edit_title(&mut self, title: &str) -> Result<InputOutcome> {
        if !self.editor.is_open() {
            return Ok(InputOutcome::default());
        }
        self.editor.set_title(title);
        if self.ensure_song_exists()? {
            return Ok(InputOutcome {
                materialized: true,
                list_changed: true,
            });
        }
        let updated = match self.editor.current_id() {
            Some(id) => self.store.update(id, SongField::Title(title))?,
            None => false,
        };
        debug!(updated, "title edited");
        Ok(InputOutcome {
            materialized: false,
            list_changed: updated,
        })
    }

    pub fn edit_content(&mut self, content: &str) -> Result<InputOutcome> {
        if !self.editor.is_open() {
            return Ok(InputOutcome::default());
        }
        self.editor.set_content(content);
        if self.ensure_song_exists()? {
            return Ok(InputOutcome {
                materialized: true,
                list_changed: true,
            });
        }
        if let Some(id) = self.editor.current_id() {
            let updated = self.store.update(id, SongField::Content(content))?;
            debug!(updated, "content edited");
        }
        Ok(InputOutcome::default())
    }

    /// Stores the unsaved editor as a new song once it is substantive.
    fn ensure_song_exists(&mut self) -> Result<bool> {
        if !self.editor.needs_materialization() {
            return Ok(false);
        }
        let id = self
            .store
            .create(self.editor.title(), self.editor.content())?;
        self.editor.materialized(id);
        Ok(true)
    }

    // ------------------------------------------------------------------------
    // Theme and Export
    // ------------------------------------------------------------------------

    pub fn toggle_theme(&mut self) -> Result<Theme> {
        self.theme.toggle()
    }

    /// Export of the open song, `None` when nothing stored is open.
    pub fn export_current(&self, format: ExportFormat) -> Option<Export> {
        let id = self.editor.current_id()?;
        let song = self.store.find_by_id(id)?;
        let export = export_song(song, format);
        info!(filename = %export.filename, "exported song");
        Some(export)
    }
}
