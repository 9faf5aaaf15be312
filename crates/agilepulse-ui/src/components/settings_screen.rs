use crate::components::settings_tabs::SettingsTabs;
use crate::components::theme_toggle::ThemeToggle;
use crate::core::config::UiConfig;
use crate::core::copy;
use crate::core::sections::SettingsSection;
use crate::core::theme::ThemeMode;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub(crate) struct SettingsScreenProps {
    pub username: AttrValue,
    pub theme: ThemeMode,
    pub on_toggle_theme: Callback<MouseEvent>,
}

/// Signed-in view: header, settings tab strip and the active section panel.
#[function_component(SettingsScreen)]
pub(crate) fn settings_screen(props: &SettingsScreenProps) -> Html {
    let config = use_context::<UiConfig>().unwrap_or_default();
    let section = use_state(SettingsSection::default);

    let on_select = {
        let section = section.clone();
        Callback::from(move |next: SettingsSection| section.set(next))
    };

    html! {
        <div class="min-h-screen bg-slate-50 dark:bg-slate-900 font-sans animate-fade-in">
            <header class="flex items-center justify-between px-8 py-5 bg-white dark:bg-slate-800 shadow-sm">
                <div>
                    <p class="text-xs font-bold uppercase tracking-wide text-blue-500">{config.product_name.clone()}</p>
                    <h1 class="text-2xl font-bold text-slate-800 dark:text-white font-heading">{copy::SETTINGS_TITLE}</h1>
                </div>
                <div class="flex items-center gap-4">
                    <span class="text-sm text-slate-500 dark:text-slate-400">{copy::greeting(&props.username)}</span>
                    <ThemeToggle theme={props.theme} on_toggle={props.on_toggle_theme.clone()} />
                </div>
            </header>
            <main class="max-w-5xl mx-auto mt-8 bg-white dark:bg-slate-800 rounded-2xl shadow-sm overflow-hidden">
                <SettingsTabs active={*section} on_select={on_select} />
                <section class="p-8" id={section.id()}>
                    <h2 class="text-lg font-semibold text-slate-800 dark:text-slate-100">{section.label()}</h2>
                    <p class="mt-1 text-sm text-slate-500 dark:text-slate-400">{section.description()}</p>
                </section>
            </main>
        </div>
    }
}
