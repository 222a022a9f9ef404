//! HTML templates and styling for the songbook page.
//!
//! ## Module Structure
//!
//! - `styles` - CSS constants and theme definitions
//! - `components` - top bar and base page template
//! - `list` - song list rows
//! - `editor` - editor panel with toolbar
//! - `script` - page script that forwards DOM events to the API

mod components;
mod editor;
mod list;
mod script;
mod styles;

pub use components::{base_html, top_bar};
pub use editor::render_editor_panel;
pub use list::render_song_list;
pub use script::{page_script, EDITOR_REGION_ID};
pub use styles::STYLE;

use crate::models::EditorView;
use crate::songbook::Songbook;

/// The whole page for the songbook's current state.
pub fn render_page(book: &Songbook) -> String {
    let body = format!(
        r#"{top_bar}
        <main class="layout">
            <aside id="song-list">{list}</aside>
            {editor}
        </main>"#,
        top_bar = top_bar(book.query(), book.theme()),
        list = render_song_list(&book.visible_songs()),
        editor = render_editor_panel(book.editor()),
    );
    let script = page_script(&EditorView::from_editor(book.editor()));
    base_html("Songbook", &body, book.theme(), &script)
}
