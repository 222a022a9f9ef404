//! Shared HTML components: the top bar and the base page template.

use crate::songs::html_escape;
use crate::theme::Theme;

use super::styles::STYLE;

// ============================================================================
// Top Bar
// ============================================================================

pub fn top_bar(search_query: &str, theme: Theme) -> String {
    format!(
        r#"<header class="top-bar">
            <h1>Songbook</h1>
            <button class="btn" id="btn-new">New</button>
            <span class="spacer"></span>
            <input type="search" id="search-input" placeholder="Search titles..." value="{query}">
            <button class="btn" id="btn-theme">{label}</button>
        </header>"#,
        query = html_escape(search_query),
        label = theme.toggle_label(),
    )
}

// ============================================================================
// Base Template
// ============================================================================

pub fn base_html(title: &str, body: &str, theme: Theme, script: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>{title}</title>
    <style>{style}</style>
</head>
<body data-theme="{theme}">
{body}
<script>{script}</script>
</body>
</html>"#,
        title = html_escape(title),
        style = STYLE,
        theme = theme.as_str(),
        body = body,
        script = script,
    )
}
