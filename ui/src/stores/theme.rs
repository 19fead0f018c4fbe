//! Light/dark theme with persistence and the document-level `dark` class.

use dioxus::prelude::*;

use crate::core::{config::THEME_KEY, storage};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    /// Unknown or missing values read as light.
    pub fn from_stored(raw: Option<&str>) -> Self {
        match raw.map(str::trim) {
            Some("dark") => Self::Dark,
            _ => Self::Light,
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    pub fn is_dark(self) -> bool {
        self == Self::Dark
    }
}

fn load_theme() -> Theme {
    match storage::load_string(THEME_KEY) {
        Ok(raw) => Theme::from_stored(raw.as_deref()),
        Err(err) => {
            tracing::warn!(%err, "failed to read stored theme");
            Theme::Light
        }
    }
}

fn persist_theme(theme: Theme) {
    if let Err(err) = storage::save_string(THEME_KEY, theme.as_str()) {
        tracing::warn!(%err, theme = theme.as_str(), "failed to persist theme");
    }
}

/// Add or remove the `dark` class on `document.documentElement`.
pub fn apply_document_theme(theme: Theme) {
    let script = format!(
        "document.documentElement.classList.toggle('dark', {});",
        theme.is_dark()
    );
    let _ = document::eval(&script);
}

#[derive(Clone, Copy)]
pub struct ThemeStore {
    theme: Signal<Theme>,
}

impl ThemeStore {
    pub fn load() -> Self {
        Self {
            theme: Signal::new(load_theme()),
        }
    }

    pub fn current(&self) -> Theme {
        (self.theme)()
    }

    pub fn toggle(&mut self) {
        let next = self.current().toggled();
        self.theme.set(next);
        persist_theme(next);
        tracing::debug!(theme = next.as_str(), "theme toggled");
    }
}

pub fn use_theme() -> ThemeStore {
    use_context::<ThemeStore>()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stored_values_parse() {
        assert_eq!(Theme::from_stored(Some("dark")), Theme::Dark);
        assert_eq!(Theme::from_stored(Some("light")), Theme::Light);
        assert_eq!(Theme::from_stored(Some("sepia")), Theme::Light);
        assert_eq!(Theme::from_stored(None), Theme::Light);
    }

    #[test]
    fn toggle_flips() {
        assert_eq!(Theme::Light.toggled(), Theme::Dark);
        assert_eq!(Theme::Dark.toggled().toggled(), Theme::Dark);
        assert!(Theme::Dark.is_dark());
    }
}
