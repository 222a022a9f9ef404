//! Songbook library - re-exports for testing and external use.
//!
//! A single-user lyrics editor served to the browser from a local axum
//! server. Songs and the theme live in a sled tree used as flat key-value
//! storage; the page forwards every DOM event to the routes built by
//! [`router`].

use axum::{
    routing::{delete, get, post},
    Router,
};
use std::env;
use std::path::PathBuf;
use std::sync::{Arc, Mutex, MutexGuard};

pub mod editor;
pub mod error;
pub mod export;
pub mod handlers;
pub mod models;
pub mod songbook;
pub mod songs;
pub mod store;
pub mod templates;
pub mod theme;
pub mod toolbar;

// ============================================================================
// Configuration
// ============================================================================

pub const DB_PATH: &str = ".songbook_db";
pub const BIND_ADDR: &str = "127.0.0.1:3000";

#[derive(Debug, Clone)]
pub struct Config {
    pub db_path: PathBuf,
    pub bind_addr: String,
}

impl Config {
    /// Defaults, overridden by `SONGBOOK_DB` and `SONGBOOK_ADDR`.
    pub fn from_env() -> Self {
        Self {
            db_path: env::var("SONGBOOK_DB")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from(DB_PATH)),
            bind_addr: env::var("SONGBOOK_ADDR").unwrap_or_else(|_| BIND_ADDR.to_string()),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            db_path: PathBuf::from(DB_PATH),
            bind_addr: BIND_ADDR.to_string(),
        }
    }
}

// ============================================================================
// Application State
// ============================================================================

pub struct AppState {
    songbook: Mutex<Songbook>,
}

impl AppState {
    pub fn open(config: &Config) -> Result<Self> {
        let db = sled::open(&config.db_path)?;
        Self::from_db(&db)
    }

    pub fn from_db(db: &sled::Db) -> Result<Self> {
        let storage = Storage::open(db)?;
        Ok(Self {
            songbook: Mutex::new(Songbook::load(storage)),
        })
    }

    /// Exclusive access for the duration of one event.
    pub fn songbook(&self) -> MutexGuard<'_, Songbook> {
        // mutations persist before returning, so a poisoned lock is still consistent
        self.songbook.lock().unwrap_or_else(|e| e.into_inner())
    }
}

// ============================================================================
// Routes
// ============================================================================

pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        // List routes; `GET /api/songs?q=` also stores the search query
        .route("/api/songs", get(handlers::list_songs))
        .route("/api/songs/{id}", delete(handlers::delete_song))
        // Editor routes
        .route("/api/editor/new", post(handlers::new_song))
        .route("/api/editor/open/{id}", post(handlers::open_song))
        .route("/api/editor/close", post(handlers::close_editor))
        .route("/api/editor/title", post(handlers::edit_title))
        .route("/api/editor/content", post(handlers::edit_content))
        .route("/api/editor/font-size", post(handlers::set_font_size))
        // Theme and export
        .route("/api/theme", post(handlers::toggle_theme))
        .route("/api/export", get(handlers::export_song))
        .with_state(state)
}

// Re-export commonly used types
pub use editor::{Editor, EditorState, FontSize};
pub use error::{Result, SongbookError};
pub use export::{export_song, Export, ExportFormat};
pub use models::{Counts, EditorView, Song};
pub use songbook::{InputOutcome, Songbook};
pub use songs::{count_text, html_escape, plain_text, preview, search_songs, strip_tags};
pub use store::{SongField, SongStore, Storage};
pub use theme::{Theme, ThemeController};
pub use toolbar::{apply, ExecCommandScript, RichTextCommands, ToolbarAction};
