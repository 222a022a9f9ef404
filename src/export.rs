//! Plain-text export of a song as a downloadable file.

use serde::{Deserialize, Serialize};

use crate::models::Song;
use crate::songs::strip_tags;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    #[default]
    Txt,
    Doc,
}

impl ExportFormat {
    pub const ALL: [ExportFormat; 2] = [ExportFormat::Txt, ExportFormat::Doc];

    pub fn extension(self) -> &'static str {
        match self {
            ExportFormat::Txt => "txt",
            ExportFormat::Doc => "doc",
        }
    }

    pub fn mime_type(self) -> &'static str {
        match self {
            ExportFormat::Txt => "text/plain",
            ExportFormat::Doc => "application/msword",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Export {
    pub filename: String,
    pub mime_type: &'static str,
    pub body: String,
}

impl Export {
    /// `Content-Disposition` value with an ASCII fallback name and the exact
    /// name percent-encoded in `filename*`.
    pub fn content_disposition(&self) -> String {
        let fallback: String = self
            .filename
            .chars()
            .map(|c| {
                if c.is_ascii() && !c.is_ascii_control() && c != '"' && c != '\\' {
                    c
                } else {
                    '_'
                }
            })
            .collect();
        format!(
            "attachment; filename=\"{}\"; filename*=UTF-8''{}",
            fallback,
            urlencoding::encode(&self.filename)
        )
    }
}

pub fn export_song(song: &Song, format: ExportFormat) -> Export {
    Export {
        filename: format!("{}.{}", song.title, format.extension()),
        mime_type: format.mime_type(),
        body: strip_tags(&song.content),
    }
}
