use crate::components::icons::{IconMoon, IconSun};
use crate::core::theme::ThemeMode;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub(crate) struct ThemeToggleProps {
    pub theme: ThemeMode,
    pub on_toggle: Callback<MouseEvent>,
}

const ICON_BASE: &str = "w-6 h-6 absolute inset-0 transition-all duration-300";

#[function_component(ThemeToggle)]
pub(crate) fn theme_toggle(props: &ThemeToggleProps) -> Html {
    let label = props.theme.toggle_label();
    let (sun, moon) = if props.theme.is_dark() {
        ("opacity-100 rotate-0 scale-100", "opacity-0 -rotate-90 scale-0")
    } else {
        ("opacity-0 rotate-90 scale-0", "opacity-100 rotate-0 scale-100")
    };
    html! {
        <button
            type="button"
            class="relative p-2 text-slate-400 hover:text-blue-600 dark:text-slate-500 dark:hover:text-blue-400 transition-colors group"
            aria-label={label}
            title={label}
            onclick={props.on_toggle.clone()}
        >
            <div class="relative w-6 h-6">
                <IconSun class={classes!(ICON_BASE, sun)} />
                <IconMoon class={classes!(ICON_BASE, moon)} />
            </div>
            <div class="absolute inset-0 rounded-full bg-blue-500/10 dark:bg-blue-400/10 opacity-0 group-hover:opacity-100 transition-opacity -z-10" />
        </button>
    }
}
