pub(crate) mod icons;
pub(crate) mod login;
pub(crate) mod settings_screen;
pub(crate) mod settings_tab;
pub(crate) mod settings_tabs;
pub(crate) mod theme_toggle;
