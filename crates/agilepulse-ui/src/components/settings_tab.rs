use crate::core::tab_style::{INDICATOR_CLASSES, TabAppearance};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub(crate) struct SettingsTabProps {
    #[prop_or_default]
    pub active: bool,
    pub label: AttrValue,
    #[prop_or_default]
    pub icon: Html,
    #[prop_or_default]
    pub onclick: Callback<MouseEvent>,
}

/// Stateless tab button; clicks are forwarded whether or not the tab is active.
#[function_component(SettingsTab)]
pub(crate) fn settings_tab(props: &SettingsTabProps) -> Html {
    let appearance = TabAppearance::for_state(props.active);
    html! {
        <button
            type="button"
            class={appearance.button_classes()}
            aria-pressed={props.active.to_string()}
            disabled={appearance.disabled}
            onclick={props.onclick.clone()}
        >
            <div class={appearance.icon_classes()}>
                {props.icon.clone()}
            </div>
            {props.label.clone()}
            {if appearance.indicator {
                html! { <div class={INDICATOR_CLASSES} /> }
            } else { html! {} }}
        </button>
    }
}
