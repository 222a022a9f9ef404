//! Song text processing: escaping, tag stripping, counts, previews and search.

use regex::Regex;
use std::sync::LazyLock;

use crate::models::{Counts, Song};

/// Title given to a song opened with "new" before anything is typed.
pub const UNTITLED: &str = "Untitled";

/// Number of content characters shown in a list row.
pub const PREVIEW_CHARS: usize = 15;

static TAG_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"<[^>]+>").unwrap());

static LINE_BREAK_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)<br\s*/?>|</(?:div|p|li|h[1-6])\s*>").unwrap()
});

// ============================================================================
// Text Escaping
// ============================================================================

pub fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

// ============================================================================
// Markup Stripping
// ============================================================================

/// Removes every `<...>` run. Not an HTML parser: entities stay encoded and
/// malformed markup can leave stray characters behind.
pub fn strip_tags(html: &str) -> String {
    TAG_RE.replace_all(html, "").into_owned()
}

/// Rendered text of an editable region's markup, close to what a browser
/// reports as the region's `innerText`.
pub fn plain_text(html: &str) -> String {
    let broken = LINE_BREAK_RE.replace_all(html, "\n");
    decode_entities(&strip_tags(&broken))
}

fn decode_entities(s: &str) -> String {
    // &amp; goes last so "&amp;lt;" decodes to "&lt;" and not "<"
    s.replace("&nbsp;", " ")
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&#39;", "'")
        .replace("&amp;", "&")
}

// ============================================================================
// Counts
// ============================================================================

pub fn count_text(html: &str) -> Counts {
    let text = plain_text(html);
    let trimmed = text.trim();
    Counts {
        words: trimmed.split_whitespace().count(),
        chars: trimmed.chars().count(),
    }
}

// ============================================================================
// List Helpers
// ============================================================================

/// Escaped first [`PREVIEW_CHARS`] characters of the raw content.
pub fn preview(content: &str) -> String {
    let head: String = content.chars().take(PREVIEW_CHARS).collect();
    html_escape(&head)
}

/// Songs whose title contains `query`, ignoring case, in collection order.
pub fn search_songs<'a>(songs: &'a [Song], query: &str) -> Vec<&'a Song> {
    let query_lower = query.to_lowercase();
    songs
        .iter()
        .filter(|song| song.title.to_lowercase().contains(&query_lower))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn song(id: &str, title: &str) -> Song {
        Song {
            id: id.to_string(),
            title: title.to_string(),
            content: String::new(),
        }
    }

    #[test]
    fn test_html_escape() {
        assert_eq!(
            html_escape(r#"<a href="x">Tom & 'Jerry'</a>"#),
            "&lt;a href=&quot;x&quot;&gt;Tom &amp; &#39;Jerry&#39;&lt;/a&gt;"
        );
    }

    #[test]
    fn test_strip_tags() {
        assert_eq!(strip_tags("<b>Hi</b> there"), "Hi there");
        assert_eq!(strip_tags("<div><i>a</i></div><br>b"), "ab");
        assert_eq!(strip_tags("1 &lt; 2"), "1 &lt; 2");
    }

    #[test]
    fn test_strip_tags_swallows_stray_bracket() {
        // a bare '<' runs until the next '>'
        assert_eq!(strip_tags("a < b <i>c</i>"), "a c");
    }

    #[test]
    fn test_plain_text_breaks_and_entities() {
        assert_eq!(plain_text("one<br>two"), "one\ntwo");
        assert_eq!(plain_text("<div>one</div><div>two</div>"), "one\ntwo\n");
        assert_eq!(plain_text("a&nbsp;&amp;&nbsp;b"), "a & b");
        assert_eq!(plain_text("&amp;lt;"), "&lt;");
    }

    #[test]
    fn test_count_irregular_spacing() {
        let counts = count_text("one  two   three");
        assert_eq!(counts.words, 3);
        assert_eq!(counts.chars, "one  two   three".len());
    }

    #[test]
    fn test_count_trims_and_ignores_markup() {
        let counts = count_text("  <b>hello</b>&nbsp;world<br>  ");
        assert_eq!(counts.words, 2);
        assert_eq!(counts.chars, "hello world".len());
    }

    #[test]
    fn test_count_empty() {
        assert_eq!(count_text(""), Counts::default());
        assert_eq!(count_text("<br><div></div>"), Counts::default());
    }

    #[test]
    fn test_count_chars_not_bytes() {
        assert_eq!(count_text("héllo").chars, 5);
    }

    #[test]
    fn test_preview_truncates_then_escapes() {
        assert_eq!(preview("Hello"), "Hello");
        assert_eq!(preview("abcdefghijklmnopqrstuvwxyz"), "abcdefghijklmno");
        assert_eq!(preview("<b>bold</b>"), "&lt;b&gt;bold&lt;/b&gt;");
        assert_eq!(preview("<script>alert(1)</script>"), "&lt;script&gt;alert(1");
    }

    #[test]
    fn test_search_case_insensitive_substring() {
        let songs = vec![song("1", "Catalog"), song("2", "Dog"), song("3", "Bobcat")];
        let found: Vec<&str> = search_songs(&songs, "cat")
            .iter()
            .map(|s| s.title.as_str())
            .collect();
        assert_eq!(found, vec!["Catalog", "Bobcat"]);
    }

    #[test]
    fn test_search_empty_query_matches_all() {
        let songs = vec![song("1", "A"), song("2", "B")];
        assert_eq!(search_songs(&songs, "").len(), 2);
    }
}
