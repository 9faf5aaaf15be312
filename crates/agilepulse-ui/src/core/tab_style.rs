//! Class composition for the settings tab button.

const BUTTON_BASE: &str =
    "flex items-center gap-3 px-6 py-4 text-sm font-semibold transition-all relative group";
const BUTTON_ACTIVE: &str = "text-indigo-600 dark:text-indigo-400";
const BUTTON_INACTIVE: &str =
    "text-slate-500 hover:text-slate-700 dark:text-slate-400 dark:hover:text-slate-200";
const ICON_BASE: &str = "transition-transform duration-300";
const ICON_ACTIVE: &str = "scale-110";
const ICON_INACTIVE: &str = "group-hover:scale-105";

/// Classes for the bar drawn under the active tab.
pub const INDICATOR_CLASSES: &str = "absolute bottom-0 left-0 right-0 h-0.5 bg-indigo-600 dark:bg-indigo-400 rounded-full animate-in fade-in slide-in-from-bottom-1 duration-300";

/// Everything the tab button renders differently depending on `active`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TabAppearance {
    /// State-specific classes for the `<button>`.
    pub button: &'static str,
    /// State-specific classes for the icon wrapper.
    pub icon: &'static str,
    /// Whether the active indicator bar is rendered.
    pub indicator: bool,
    /// Whether the button ignores clicks; tabs stay clickable in both states.
    pub disabled: bool,
}

impl TabAppearance {
    /// Appearance for a tab in the given state.
    #[must_use]
    pub const fn for_state(active: bool) -> Self {
        if active {
            Self {
                button: BUTTON_ACTIVE,
                icon: ICON_ACTIVE,
                indicator: true,
                disabled: false,
            }
        } else {
            Self {
                button: BUTTON_INACTIVE,
                icon: ICON_INACTIVE,
                indicator: false,
                disabled: false,
            }
        }
    }

    /// Full class list for the `<button>`.
    #[must_use]
    pub fn button_classes(self) -> String {
        format!("{BUTTON_BASE} {}", self.button)
    }

    /// Full class list for the icon wrapper.
    #[must_use]
    pub fn icon_classes(self) -> String {
        format!("{ICON_BASE} {}", self.icon)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn indicator_only_when_active() {
        assert!(TabAppearance::for_state(true).indicator);
        assert!(!TabAppearance::for_state(false).indicator);
    }

    #[test]
    fn clicks_accepted_in_both_states() {
        assert!(!TabAppearance::for_state(true).disabled);
        assert!(!TabAppearance::for_state(false).disabled);
    }

    #[test]
    fn active_tab_uses_indigo_and_scaled_icon() {
        let active = TabAppearance::for_state(true);
        assert!(active.button_classes().contains("text-indigo-600"));
        assert!(!active.button_classes().contains("text-slate-500"));
        assert!(active.icon_classes().ends_with("scale-110"));
    }

    #[test]
    fn inactive_tab_uses_slate_with_hover() {
        let inactive = TabAppearance::for_state(false);
        let classes = inactive.button_classes();
        assert!(classes.contains("text-slate-500"));
        assert!(classes.contains("hover:text-slate-700"));
        assert!(!classes.contains("indigo"));
        assert!(inactive.icon_classes().contains("group-hover:scale-105"));
    }

    #[test]
    fn base_classes_shared_by_both_states() {
        for active in [true, false] {
            let classes = TabAppearance::for_state(active).button_classes();
            assert!(classes.starts_with(BUTTON_BASE));
            assert!(classes.contains("group"));
        }
    }
}
