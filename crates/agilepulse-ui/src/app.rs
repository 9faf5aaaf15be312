use crate::components::login::Login;
use crate::components::settings_screen::SettingsScreen;
use crate::core::config::{CONFIG_ELEMENT_ID, UiConfig};
use crate::core::login::Credentials;
use crate::core::theme::ThemeMode;
use gloo::console;
use gloo::utils::{document, window};
use web_sys::MediaQueryList;
use yew::prelude::*;

const DARK_CLASS: &str = "dark";

#[function_component(AgilePulseApp)]
pub(crate) fn agilepulse_app() -> Html {
    let config = use_memo(|_| load_config(), ());
    let theme = use_state(load_theme);
    let username = use_state(|| None as Option<String>);

    {
        let theme = *theme;
        use_effect_with_deps(
            move |_| {
                apply_theme(theme);
                || ()
            },
            theme,
        );
    }

    let toggle_theme = {
        let theme = theme.clone();
        Callback::from(move |_: MouseEvent| theme.set(theme.toggled()))
    };

    let on_login = {
        let username = username.clone();
        Callback::from(move |credentials: Credentials| {
            console::log!("login accepted");
            username.set(Some(credentials.username));
        })
    };

    html! {
        <ContextProvider<UiConfig> context={(*config).clone()}>
            {match &*username {
                Some(name) => html! {
                    <SettingsScreen
                        username={name.clone()}
                        theme={*theme}
                        on_toggle_theme={toggle_theme}
                    />
                },
                None => html! { <Login on_login={on_login} /> },
            }}
        </ContextProvider<UiConfig>>
    }
}

fn load_config() -> UiConfig {
    let Some(element) = document().get_element_by_id(CONFIG_ELEMENT_ID) else {
        return UiConfig::default();
    };
    let raw = element.text_content().unwrap_or_default();
    match UiConfig::from_json(&raw) {
        Ok(config) => config,
        Err(err) => {
            console::error!("ui config rejected, using defaults", err.to_string());
            UiConfig::default()
        }
    }
}

fn load_theme() -> ThemeMode {
    ThemeMode::from_prefers_dark(prefers_dark().unwrap_or(false))
}

fn prefers_dark() -> Option<bool> {
    let media: MediaQueryList = window()
        .match_media("(prefers-color-scheme: dark)")
        .ok()??;
    Some(media.matches())
}

fn apply_theme(theme: ThemeMode) {
    let Some(root) = document().document_element() else {
        return;
    };
    let classes = root.class_list();
    let result = if theme.is_dark() {
        classes.add_1(DARK_CLASS)
    } else {
        classes.remove_1(DARK_CLASS)
    };
    if let Err(err) = result {
        console::error!("theme class update failed", theme.as_str(), err);
    }
}

/// Entrypoint invoked by Trunk for wasm32 builds.
pub fn run_app() {
    console_error_panic_hook::set_once();
    yew::Renderer::<AgilePulseApp>::new().render();
}
