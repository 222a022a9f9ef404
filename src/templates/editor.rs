//! Editor panel template: toolbar, title field, editable region and counts.
//!
//! Field values are not rendered here; the page script fills them from the
//! embedded editor view so song markup never passes through the HTML parser
//! of the page itself.

use crate::editor::{Editor, FONT_SIZES};
use crate::export::ExportFormat;
use crate::toolbar::ToolbarAction;

pub fn render_editor_panel(editor: &Editor) -> String {
    let toolbar_buttons: String = ToolbarAction::ALL
        .into_iter()
        .map(|action| {
            format!(
                r#"<button class="btn toolbtn" data-action="{}">{}</button>"#,
                action.as_str(),
                action.label()
            )
        })
        .collect();

    let current_size = editor.font_size().px();
    let size_options: String = FONT_SIZES
        .iter()
        .map(|&px| {
            let selected = if px == current_size { " selected" } else { "" };
            format!(r#"<option value="{px}"{selected}>{px}px</option>"#)
        })
        .collect();

    let format_options: String = ExportFormat::ALL
        .into_iter()
        .map(|format| {
            format!(
                r#"<option value="{ext}">.{ext}</option>"#,
                ext = format.extension()
            )
        })
        .collect();

    let hidden = if editor.is_open() { "" } else { " hidden" };

    format!(
        r#"<section id="editor" class="editor{hidden}">
            <div class="toolbar">
                {toolbar_buttons}
                <select id="font-size">{size_options}</select>
                <span class="spacer"></span>
                <select id="export-format">{format_options}</select>
                <button class="btn" id="btn-export">Export</button>
                <button class="btn" id="btn-close">Close</button>
            </div>
            <input type="text" id="song-title" autocomplete="off">
            <div id="editor-area" contenteditable="true"></div>
            <div class="counts">
                <span id="word-count">0 words</span>
                <span id="char-count">0 chars</span>
            </div>
        </section>"#
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_closed_panel_is_hidden() {
        let html = render_editor_panel(&Editor::new());
        assert!(html.contains(r#"class="editor hidden""#));
    }

    #[test]
    fn test_open_panel_lists_controls() {
        let mut editor = Editor::new();
        editor.open_new();
        let html = render_editor_panel(&editor);
        assert!(html.contains(r#"class="editor""#));
        for action in ToolbarAction::ALL {
            assert!(html.contains(&format!(r#"data-action="{}""#, action.as_str())));
        }
        assert!(html.contains(r#"<option value="16" selected>16px</option>"#));
        assert!(html.contains(r#"<option value="doc">.doc</option>"#));
    }
}
