//! Light/dark display preference, persisted under its own storage key.

use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::info;

use crate::error::Result;
use crate::store::{Storage, THEME_KEY};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

impl Theme {
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "dark" => Some(Theme::Dark),
            "light" => Some(Theme::Light),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Dark => "dark",
            Theme::Light => "light",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Theme::Dark => Theme::Light,
            Theme::Light => Theme::Dark,
        }
    }

    /// Toggle button label: the theme a click switches to.
    pub fn toggle_label(self) -> &'static str {
        match self.toggled() {
            Theme::Dark => "Dark",
            Theme::Light => "Light",
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

pub struct ThemeController {
    storage: Storage,
    theme: Theme,
}

impl ThemeController {
    /// Stored theme, or the default when absent, unreadable or unknown.
    pub fn restore(storage: Storage) -> Self {
        let theme = storage
            .get_item(THEME_KEY)
            .ok()
            .flatten()
            .and_then(|s| Theme::parse(&s))
            .unwrap_or_default();
        Self { storage, theme }
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    pub fn toggle(&mut self) -> Result<Theme> {
        let next = self.theme.toggled();
        self.storage.set_item(THEME_KEY, next.as_str())?;
        self.theme = next;
        info!(theme = %self.theme, "theme changed");
        Ok(self.theme)
    }
}
