//! CSS styles for the songbook page.
//!
//! Both themes share the Solarized palette; `data-theme` on the body picks
//! which end of it is background and which is foreground.

// ============================================================================
// CSS Styles
// ============================================================================

pub const STYLE: &str = r#"
:root {
    --base03: #002b36;
    --base02: #073642;
    --base01: #586e75;
    --base00: #657b83;
    --base0: #839496;
    --base1: #93a1a1;
    --base2: #eee8d5;
    --base3: #fdf6e3;

    --red: #dc322f;
    --blue: #268bd2;
    --cyan: #2aa198;

    --editor-font-size: 16px;
    --editor-line-height: 24px;
}

body[data-theme="dark"] {
    --bg: var(--base03);
    --panel: var(--base02);
    --fg: var(--base0);
    --muted: var(--base01);
    --border: var(--base01);
    --accent: var(--blue);
}

body[data-theme="light"] {
    --bg: var(--base3);
    --panel: var(--base2);
    --fg: var(--base00);
    --muted: var(--base1);
    --border: var(--base1);
    --accent: var(--blue);
}

* { box-sizing: border-box; }

body {
    margin: 0;
    font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", sans-serif;
    background: var(--bg);
    color: var(--fg);
}

.top-bar {
    display: flex;
    gap: 8px;
    align-items: center;
    padding: 10px 16px;
    background: var(--panel);
    border-bottom: 1px solid var(--border);
}

.top-bar h1 {
    font-size: 18px;
    margin: 0 12px 0 0;
}

.top-bar .spacer,
.toolbar .spacer { flex: 1; }

.top-bar input[type="search"] {
    padding: 6px 10px;
    border: 1px solid var(--border);
    border-radius: 4px;
    background: var(--bg);
    color: var(--fg);
}

.btn {
    padding: 6px 12px;
    border: 1px solid var(--border);
    border-radius: 4px;
    background: var(--bg);
    color: var(--fg);
    cursor: pointer;
}

.btn:hover { border-color: var(--accent); }
.btn.small { padding: 2px 8px; font-size: 12px; }
.btn.danger:hover { border-color: var(--red); color: var(--red); }

.layout {
    display: flex;
    gap: 16px;
    padding: 16px;
}

#song-list {
    flex: 0 0 320px;
    display: flex;
    flex-direction: column;
    gap: 8px;
}

.song-item {
    display: flex;
    justify-content: space-between;
    gap: 8px;
    padding: 8px 10px;
    background: var(--panel);
    border: 1px solid var(--border);
    border-radius: 4px;
}

.song-title { font-weight: 600; }
.song-preview { color: var(--muted); font-size: 13px; }
.empty { color: var(--muted); font-style: italic; }

#editor {
    flex: 1;
    display: flex;
    flex-direction: column;
    gap: 8px;
}

#editor.hidden { visibility: hidden; }

.toolbar {
    display: flex;
    flex-wrap: wrap;
    gap: 6px;
    align-items: center;
}

#song-title {
    font-size: 20px;
    padding: 6px 8px;
    border: 1px solid var(--border);
    border-radius: 4px;
    background: var(--bg);
    color: var(--fg);
}

#editor-area {
    min-height: 320px;
    padding: 12px;
    border: 1px solid var(--border);
    border-radius: 4px;
    background: var(--panel);
    font-size: var(--editor-font-size);
    line-height: var(--editor-line-height);
    outline: none;
    white-space: pre-wrap;
}

.counts {
    display: flex;
    gap: 16px;
    color: var(--muted);
    font-size: 12px;
}
"#;
