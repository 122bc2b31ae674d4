//! Light/dark theme preference

use std::fmt;
use std::str::FromStr;

use crate::config::{PageConfig, THEME_KEY};
use crate::store::KeyValueStore;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

impl Theme {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Dark => "dark",
            Self::Light => "light",
        }
    }

    pub const fn toggled(self) -> Self {
        match self {
            Self::Dark => Self::Light,
            Self::Light => Self::Dark,
        }
    }

    /// Toggle button icon
    pub const fn icon_src(self) -> &'static str {
        match self {
            Self::Dark => "assets/icons/moon.svg",
            Self::Light => "assets/icons/sun.svg",
        }
    }

    pub const fn icon_alt(self) -> &'static str {
        match self {
            Self::Dark => "Dark mode",
            Self::Light => "Light mode",
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown theme: {0}")]
pub struct UnknownTheme(pub String);

impl FromStr for Theme {
    type Err = UnknownTheme;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "dark" => Ok(Self::Dark),
            "light" => Ok(Self::Light),
            other => Err(UnknownTheme(other.to_string())),
        }
    }
}

/// Theme preference bound to a store
pub struct ThemeStore<S> {
    store: S,
    key: String,
}

impl<S: KeyValueStore> ThemeStore<S> {
    pub fn new(store: S) -> Self {
        Self {
            store,
            key: THEME_KEY.to_string(),
        }
    }

    pub fn with_config(store: S, config: &PageConfig) -> Self {
        Self {
            store,
            key: config.theme_key.clone(),
        }
    }

    /// Stored theme, dark when absent, unknown or unreadable
    pub fn load(&self) -> Theme {
        match self.store.get(&self.key) {
            Ok(Some(raw)) => raw.parse().unwrap_or_else(|e: UnknownTheme| {
                tracing::debug!(error = %e, "Ignoring stored theme");
                Theme::default()
            }),
            Ok(None) => Theme::default(),
            Err(e) => {
                tracing::warn!(error = %e, "Theme storage unreadable");
                Theme::default()
            }
        }
    }

    pub fn save(&self, theme: Theme) {
        if let Err(e) = self.store.set(&self.key, theme.as_str()) {
            tracing::warn!(error = %e, "Theme not persisted");
        }
    }

    /// Flip `current`, persist and return the new theme
    pub fn toggle(&self, current: Theme) -> Theme {
        let next = current.toggled();
        self.save(next);
        next
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryStore;

    #[test]
    fn test_default_is_dark() {
        let themes = ThemeStore::new(MemoryStore::new());
        assert_eq!(themes.load(), Theme::Dark);
    }

    #[test]
    fn test_unknown_value_is_dark() {
        let themes = ThemeStore::new(MemoryStore::with_entries(vec![("theme", "sepia")]));
        assert_eq!(themes.load(), Theme::Dark);
    }

    #[test]
    fn test_toggle_persists() {
        let store = MemoryStore::new();
        let themes = ThemeStore::new(store.clone());

        let next = themes.toggle(themes.load());
        assert_eq!(next, Theme::Light);
        assert_eq!(store.get("theme").unwrap().as_deref(), Some("light"));
        assert_eq!(themes.load(), Theme::Light);

        assert_eq!(themes.toggle(next), Theme::Dark);
    }

    #[test]
    fn test_icons() {
        assert_eq!(Theme::Dark.icon_src(), "assets/icons/moon.svg");
        assert_eq!(Theme::Light.icon_alt(), "Light mode");
    }
}
