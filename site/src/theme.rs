//! Light/dark theme preference.
//!
//! Resolution order: saved `theme` key in localStorage, then the
//! `prefers-color-scheme` media query. Dark mode is a `data-theme="dark"`
//! attribute on the document element; storage failures degrade to the
//! default theme.

const THEME_KEY: &str = "theme";
const DARK_QUERY: &str = "(prefers-color-scheme: dark)";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Theme {
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

    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }
}

/// A saved value always wins; only its absence defers to the media query.
/// Unrecognized saved values count as light, matching how the key is
/// written.
pub fn resolve_initial(saved: Option<&str>, prefers_dark: bool) -> Theme {
    match saved {
        Some("dark") => Theme::Dark,
        Some(_) => Theme::Light,
        None if prefers_dark => Theme::Dark,
        None => Theme::Light,
    }
}

pub fn load() -> Theme {
    let saved = web_sys::window()
        .and_then(|w| w.local_storage().ok().flatten())
        .and_then(|storage| storage.get_item(THEME_KEY).ok().flatten());
    let prefers_dark = web_sys::window()
        .and_then(|w| w.match_media(DARK_QUERY).ok().flatten())
        .map(|query| query.matches())
        .unwrap_or(false);
    resolve_initial(saved.as_deref(), prefers_dark)
}

pub fn store(theme: Theme) {
    if let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten()) {
        let _ = storage.set_item(THEME_KEY, theme.as_str());
    }
}

pub fn apply(theme: Theme) {
    let Some(root) = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.document_element())
    else {
        return;
    };
    match theme {
        Theme::Dark => {
            let _ = root.set_attribute("data-theme", "dark");
        }
        Theme::Light => {
            let _ = root.remove_attribute("data-theme");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn saved_value_wins_over_media_query() {
        assert_eq!(resolve_initial(Some("light"), true), Theme::Light);
        assert_eq!(resolve_initial(Some("dark"), false), Theme::Dark);
    }

    #[test]
    fn absent_value_defers_to_media_query() {
        assert_eq!(resolve_initial(None, true), Theme::Dark);
        assert_eq!(resolve_initial(None, false), Theme::Light);
    }

    #[test]
    fn garbage_saved_value_is_light() {
        assert_eq!(resolve_initial(Some("solarized"), true), Theme::Light);
    }

    #[test]
    fn toggle_round_trips() {
        assert_eq!(Theme::Light.toggled(), Theme::Dark);
        assert_eq!(Theme::Dark.toggled().as_str(), "light");
    }
}
