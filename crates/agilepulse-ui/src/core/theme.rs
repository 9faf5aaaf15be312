//! Light/dark theme mode.

use crate::core::copy;

/// Theme mode selection; `Dark` maps to Tailwind's `dark` root class.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ThemeMode {
    /// Light theme mode.
    #[default]
    Light,
    /// Dark theme mode.
    Dark,
}

impl ThemeMode {
    /// String identifier used in CSS datasets.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    /// The other mode.
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    /// Initial mode from the `prefers-color-scheme: dark` media query result.
    #[must_use]
    pub const fn from_prefers_dark(prefers_dark: bool) -> Self {
        if prefers_dark { Self::Dark } else { Self::Light }
    }

    /// Whether the `dark` class belongs on the document root.
    #[must_use]
    pub const fn is_dark(self) -> bool {
        matches!(self, Self::Dark)
    }

    /// Accessible label of the toggle button, describing what a click does.
    #[must_use]
    pub const fn toggle_label(self) -> &'static str {
        match self {
            Self::Light => copy::ENABLE_DARK_MODE,
            Self::Dark => copy::ENABLE_LIGHT_MODE,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn theme_mode_to_str() {
        assert_eq!(ThemeMode::Light.as_str(), "light");
        assert_eq!(ThemeMode::Dark.as_str(), "dark");
    }

    #[test]
    fn toggling_twice_is_identity() {
        for mode in [ThemeMode::Light, ThemeMode::Dark] {
            assert_ne!(mode.toggled(), mode);
            assert_eq!(mode.toggled().toggled(), mode);
        }
    }

    #[test]
    fn toggle_label_describes_next_mode() {
        assert_eq!(ThemeMode::Light.toggle_label(), "Ativar modo escuro");
        assert_eq!(ThemeMode::Dark.toggle_label(), "Ativar modo claro");
    }

    #[test]
    fn prefers_dark_selects_initial_mode() {
        assert!(ThemeMode::from_prefers_dark(true).is_dark());
        assert_eq!(ThemeMode::from_prefers_dark(false), ThemeMode::Light);
    }
}
