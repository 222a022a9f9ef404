//! HTTP route handlers.
//!
//! Each handler locks the songbook for the whole event, applies it, and
//! answers with what the page needs to repaint.

use crate::error::Result;
use crate::export::ExportFormat;
use crate::models::{ContentInput, EditorView, FontSizeInput, ThemeView, TitleInput};
use crate::songbook::Songbook;
use crate::templates::{render_page, render_song_list};
use crate::AppState;
use axum::{
    extract::{Path, Query, State},
    http::{header, StatusCode},
    response::{Html, IntoResponse, Response},
    Json,
};
use serde::Deserialize;
use std::sync::Arc;

fn list_html(book: &Songbook) -> String {
    render_song_list(&book.visible_songs())
}

fn editor_view(book: &Songbook) -> EditorView {
    EditorView::from_editor(book.editor())
}

// ============================================================================
// Page
// ============================================================================

pub async fn index(State(state): State<Arc<AppState>>) -> Html<String> {
    let book = state.songbook();
    Html(render_page(&book))
}

// ============================================================================
// List Handlers
// ============================================================================

#[derive(Deserialize)]
pub struct ListQuery {
    pub q: Option<String>,
}

/// List fragment.
///
/// Not a pure read: a `q` parameter replaces the session's search query, and
/// every later list re-render (after edits, deletes, materialization) filters
/// by it until the next search. Without `q` the stored query is reused.
pub async fn list_songs(
    Query(query): Query<ListQuery>,
    State(state): State<Arc<AppState>>,
) -> Html<String> {
    let mut book = state.songbook();
    if let Some(q) = query.q {
        book.set_query(&q);
    }
    Html(list_html(&book))
}

pub async fn delete_song(
    Path(id): Path<String>,
    State(state): State<Arc<AppState>>,
) -> Result<Json<EditorView>> {
    let mut book = state.songbook();
    book.delete_song(&id)?;
    Ok(Json(editor_view(&book).with_list(list_html(&book))))
}

// ============================================================================
// Editor Handlers
// ============================================================================

pub async fn new_song(State(state): State<Arc<AppState>>) -> Json<EditorView> {
    let mut book = state.songbook();
    book.new_song();
    Json(editor_view(&book))
}

pub async fn open_song(
    Path(id): Path<String>,
    State(state): State<Arc<AppState>>,
) -> Json<EditorView> {
    let mut book = state.songbook();
    book.open_song(&id);
    Json(editor_view(&book))
}

pub async fn close_editor(State(state): State<Arc<AppState>>) -> Json<EditorView> {
    let mut book = state.songbook();
    book.close_editor();
    Json(editor_view(&book))
}

pub async fn edit_title(
    State(state): State<Arc<AppState>>,
    Json(body): Json<TitleInput>,
) -> Result<Json<EditorView>> {
    let mut book = state.songbook();
    let outcome = book.edit_title(&body.title)?;
    let view = editor_view(&book);
    Ok(Json(if outcome.list_changed {
        view.with_list(list_html(&book))
    } else {
        view
    }))
}

pub async fn edit_content(
    State(state): State<Arc<AppState>>,
    Json(body): Json<ContentInput>,
) -> Result<Json<EditorView>> {
    let mut book = state.songbook();
    let outcome = book.edit_content(&body.content)?;
    let view = editor_view(&book);
    Ok(Json(if outcome.list_changed {
        view.with_list(list_html(&book))
    } else {
        view
    }))
}

pub async fn set_font_size(
    State(state): State<Arc<AppState>>,
    Json(body): Json<FontSizeInput>,
) -> Json<EditorView> {
    let mut book = state.songbook();
    book.set_font_size(body.size);
    Json(editor_view(&book))
}

// ============================================================================
// Theme Handler
// ============================================================================

pub async fn toggle_theme(State(state): State<Arc<AppState>>) -> Result<Json<ThemeView>> {
    let mut book = state.songbook();
    let theme = book.toggle_theme()?;
    Ok(Json(ThemeView {
        theme: theme.as_str().to_string(),
        label: theme.toggle_label().to_string(),
    }))
}

// ============================================================================
// Export Handler
// ============================================================================

#[derive(Deserialize)]
pub struct ExportQuery {
    pub format: Option<ExportFormat>,
}

/// Download of the open song; 204 when no stored song is open.
pub async fn export_song(
    Query(query): Query<ExportQuery>,
    State(state): State<Arc<AppState>>,
) -> Response {
    let book = state.songbook();
    match book.export_current(query.format.unwrap_or_default()) {
        Some(export) => (
            [
                (
                    header::CONTENT_TYPE,
                    format!("{}; charset=utf-8", export.mime_type),
                ),
                (header::CONTENT_DISPOSITION, export.content_disposition()),
            ],
            export.body,
        )
            .into_response(),
        None => StatusCode::NO_CONTENT.into_response(),
    }
}
