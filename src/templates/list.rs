//! Song list rows.

use crate::models::Song;
use crate::songs::{html_escape, preview};

/// Full list markup; replaces the list container's contents on every render.
pub fn render_song_list(songs: &[&Song]) -> String {
    if songs.is_empty() {
        return r#"<div class="empty">No songs</div>"#.to_string();
    }

    let mut html = String::new();
    for song in songs {
        html.push_str(&format!(
            r#"<div class="song-item">
                <div>
                    <div class="song-title">{title}</div>
                    <div class="song-preview">{preview}...</div>
                </div>
                <div>
                    <button class="btn small" data-action="open" data-id="{id}">Open</button>
                    <button class="btn small danger" data-action="delete" data-id="{id}">Delete</button>
                </div>
            </div>"#,
            title = html_escape(&song.title),
            preview = preview(&song.content),
            id = html_escape(&song.id),
        ));
    }
    html
}

#[cfg(test)]
mod tests {
    use super::*;

    fn song(id: &str, title: &str, content: &str) -> Song {
        Song {
            id: id.to_string(),
            title: title.to_string(),
            content: content.to_string(),
        }
    }

    #[test]
    fn test_empty_list() {
        assert!(render_song_list(&[]).contains("No songs"));
    }

    #[test]
    fn test_row_actions_carry_id() {
        let s = song("1700000000001", "Verse", "Hello");
        let html = render_song_list(&[&s]);
        assert!(html.contains(r#"data-action="open" data-id="1700000000001""#));
        assert!(html.contains(r#"data-action="delete" data-id="1700000000001""#));
        assert!(html.contains(r#"<div class="song-preview">Hello...</div>"#));
    }

    #[test]
    fn test_row_escapes_title_and_preview() {
        let s = song("1", "<img src=x>", "<script>x</script>");
        let html = render_song_list(&[&s]);
        assert!(!html.contains("<img"));
        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;img src=x&gt;"));
        assert!(html.contains("&lt;script&gt;x&lt;/scri..."));
    }
}
