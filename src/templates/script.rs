//! Page script.
//!
//! The script only forwards DOM events to the server and paints what comes
//! back. Requests go through one promise chain so the server sees events in
//! the order the user produced them.

use crate::models::EditorView;
use crate::toolbar::dispatch_script;

/// Id of the `contenteditable` region the toolbar acts on.
pub const EDITOR_REGION_ID: &str = "editor-area";

/// JSON safe to embed inside a `<script>` element.
fn script_json(view: &EditorView) -> String {
    serde_json::to_string(view)
        .unwrap_or_else(|_| "null".to_string())
        .replace("</", "<\\/")
}

pub fn page_script(initial: &EditorView) -> String {
    format!(
        r#"
document.addEventListener('DOMContentLoaded', () => {{
    const songList = document.getElementById('song-list');
    const editor = document.getElementById('editor');
    const titleInput = document.getElementById('song-title');
    const editorArea = document.getElementById('{region}');
    const btnNew = document.getElementById('btn-new');
    const btnTheme = document.getElementById('btn-theme');
    const searchInput = document.getElementById('search-input');
    const btnExport = document.getElementById('btn-export');
    const exportFormat = document.getElementById('export-format');
    const fontSize = document.getElementById('font-size');
    const wordCount = document.getElementById('word-count');
    const charCount = document.getElementById('char-count');
    const btnClose = document.getElementById('btn-close');

    let queue = Promise.resolve();
    const enqueue = task => {{
        queue = queue.then(task).catch(() => null);
        return queue;
    }};
    const send = (method, url, body) => enqueue(() => fetch(url, {{
        method: method,
        headers: {{ 'Content-Type': 'application/json' }},
        body: body === undefined ? undefined : JSON.stringify(body)
    }}).then(r => r.ok ? r.json() : null));

    const applyEditor = (view, fill) => {{
        if (!view) return;
        if (view.list_html !== null) songList.innerHTML = view.list_html;
        editor.classList.toggle('hidden', !view.open);
        if (fill) {{
            titleInput.value = view.title;
            editorArea.innerHTML = view.content;
        }}
        wordCount.textContent = view.counts.words + ' words';
        charCount.textContent = view.counts.chars + ' chars';
        fontSize.value = String(view.font_size);
        document.documentElement.style.setProperty('--editor-font-size', view.font_size + 'px');
        document.documentElement.style.setProperty('--editor-line-height', view.line_height + 'px');
    }};

    btnNew.addEventListener('click', () => {{
        send('POST', '/api/editor/new').then(view => applyEditor(view, true));
    }});

    songList.addEventListener('click', e => {{
        const btn = e.target.closest('button[data-id]');
        if (!btn) return;
        const id = encodeURIComponent(btn.dataset.id);
        if (btn.dataset.action === 'open') {{
            send('POST', '/api/editor/open/' + id).then(view => applyEditor(view, true));
        }} else if (btn.dataset.action === 'delete') {{
            send('DELETE', '/api/songs/' + id).then(view => applyEditor(view, false));
        }}
    }});

    titleInput.addEventListener('input', () => {{
        send('POST', '/api/editor/title', {{ title: titleInput.value }})
            .then(view => applyEditor(view, false));
    }});

    editorArea.addEventListener('input', () => {{
        send('POST', '/api/editor/content', {{ content: editorArea.innerHTML }})
            .then(view => applyEditor(view, false));
    }});

    searchInput.addEventListener('input', () => {{
        const url = '/api/songs?q=' + encodeURIComponent(searchInput.value);
        enqueue(() => fetch(url).then(r => r.ok ? r.text() : null))
            .then(html => {{ if (html !== null) songList.innerHTML = html; }});
    }});

    btnTheme.addEventListener('click', () => {{
        send('POST', '/api/theme').then(view => {{
            if (!view) return;
            document.body.setAttribute('data-theme', view.theme);
            btnTheme.textContent = view.label;
        }});
    }});

    document.querySelectorAll('.toolbtn').forEach(btn => {{
        // keep the selection inside the editable region
        btn.addEventListener('mousedown', e => e.preventDefault());
        btn.addEventListener('click', () => {{
            const action = btn.dataset.action;
            {dispatch}
        }});
    }});

    fontSize.addEventListener('change', e => {{
        const size = parseInt(e.target.value, 10);
        send('POST', '/api/editor/font-size', {{ size: size }}).then(view => applyEditor(view, false));
    }});

    btnExport.addEventListener('click', () => {{
        const url = '/api/export?format=' + encodeURIComponent(exportFormat.value);
        enqueue(() => {{ window.location.href = url; }});
    }});

    btnClose.addEventListener('click', () => {{
        send('POST', '/api/editor/close').then(view => applyEditor(view, false));
    }});

    applyEditor({initial}, true);
}});
"#,
        region = EDITOR_REGION_ID,
        dispatch = dispatch_script(EDITOR_REGION_ID),
        initial = script_json(initial),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::editor::Editor;

    #[test]
    fn test_script_embeds_toolbar_dispatch() {
        let js = page_script(&EditorView::from_editor(&Editor::new()));
        assert!(js.contains("case 'underline': document.execCommand('underline'); break;"));
        assert!(js.contains("getElementById('editor-area')"));
    }

    #[test]
    fn test_embedded_view_cannot_close_script() {
        let mut view = EditorView::from_editor(&Editor::new());
        view.content = "<b>x</b></script><script>alert(1)</script>".to_string();
        let js = page_script(&view);
        assert!(!js.contains("</script>"));
        assert!(js.contains(r"<\/script>"));
    }
}
