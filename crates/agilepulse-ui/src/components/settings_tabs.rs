use crate::components::icons::section_icon;
use crate::components::settings_tab::SettingsTab;
use crate::core::sections::{SettingsSection, tab_entries};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub(crate) struct SettingsTabsProps {
    pub active: SettingsSection,
    pub on_select: Callback<SettingsSection>,
}

#[function_component(SettingsTabs)]
pub(crate) fn settings_tabs(props: &SettingsTabsProps) -> Html {
    html! {
        <nav class="flex overflow-x-auto border-b border-slate-200 dark:border-slate-700" role="tablist">
            {for tab_entries(props.active).into_iter().map(|entry| {
                let on_select = props.on_select.clone();
                html! {
                    <SettingsTab
                        key={entry.section.id()}
                        active={entry.active}
                        label={entry.section.label()}
                        icon={section_icon(entry.section.icon())}
                        onclick={Callback::from(move |_: MouseEvent| on_select.emit(entry.click()))}
                    />
                }
            })}
        </nav>
    }
}
