use crate::core::config::UiConfig;
use crate::core::copy;
use crate::core::login::{Credentials, LoginAction, LoginForm};
use gloo::console;
use std::rc::Rc;
use yew::prelude::*;

const FIELD_INPUT_CLASS: &str = "w-full p-3 bg-slate-50 border border-slate-200 rounded-lg text-slate-700 outline-none focus:border-blue-400 focus:ring-2 focus:ring-blue-100 transition-all";
const FIELD_LABEL_CLASS: &str = "block text-xs font-bold text-slate-500 uppercase mb-1 ml-1";

#[derive(Properties, PartialEq)]
pub(crate) struct LoginProps {
    pub on_login: Callback<Credentials>,
}

impl Reducible for LoginForm {
    type Action = LoginAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        next.apply(action);
        next.into()
    }
}

/// Full-screen login card with the floating dashboard illustration.
#[function_component(Login)]
pub(crate) fn login(props: &LoginProps) -> Html {
    let config = use_context::<UiConfig>().unwrap_or_default();
    let form = use_reducer(LoginForm::default);

    let on_username = {
        let form = form.dispatcher();
        Callback::from(move |value: String| form.dispatch(LoginAction::SetUsername(value)))
    };
    let on_password = {
        let form = form.dispatcher();
        Callback::from(move |value: String| form.dispatch(LoginAction::SetPassword(value)))
    };

    let onsubmit = {
        let form = form.clone();
        let on_login = props.on_login.clone();
        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();
            let mut checked = (*form).clone();
            checked.submit(|credentials| on_login.emit(credentials));
            if let Some(err) = checked.error {
                console::warn!("login rejected", err.to_string());
            }
            form.dispatch(checked.outcome());
        })
    };

    html! {
        <div class="min-h-screen w-full relative overflow-hidden flex items-center bg-[linear-gradient(135deg,#4facfe_0%,#00f2fe_100%)] font-sans">
            <div
                class="absolute bottom-0 left-0 w-full h-[30%] bg-white z-0 pointer-events-none"
                style="clip-path: ellipse(70% 100% at 50% 100%)"
            />
            <div class="hidden lg:flex absolute right-0 top-1/2 transform -translate-y-1/2 w-[55%] h-full pointer-events-none z-10 items-center justify-center pr-10">
                <img
                    src={config.illustration_src.clone()}
                    class="w-full max-w-[900px] h-auto object-contain drop-shadow-2xl animate-fade-in-up"
                    alt={copy::ILLUSTRATION_ALT}
                    style="filter: drop-shadow(0 25px 50px rgba(0,0,0,0.25))"
                />
            </div>

            <div class="container mx-auto px-6 relative z-20">
                <div class="flex flex-col lg:flex-row items-center justify-between">
                    <div class="w-full max-w-[400px] bg-white p-10 rounded-2xl shadow-[0_20px_50px_rgba(0,0,0,0.15)] lg:ml-[5%] animate-fade-in relative backdrop-blur-sm bg-white/95">
                        <div class="mb-8 text-center">
                            <h2 class="text-[#2c3e50] text-3xl font-bold mb-2 font-heading">
                                {copy::LOGIN_TITLE}
                            </h2>
                            <p class="text-slate-400 text-sm">{copy::login_subtitle(&config.product_name)}</p>
                        </div>

                        <form onsubmit={onsubmit}>
                            {form.error_message().map(|message| html! {
                                <div class="mb-4 p-3 bg-red-50 text-red-600 text-xs font-bold rounded-lg border border-red-100 animate-shake" role="alert">
                                    {message}
                                </div>
                            }).unwrap_or_default()}
                            <LoginField
                                class="mb-5 group"
                                id="login-username"
                                label={copy::USERNAME_LABEL}
                                input_type="text"
                                placeholder={copy::USERNAME_PLACEHOLDER}
                                autocomplete="username"
                                value={form.username.clone()}
                                oninput={on_username}
                            />
                            <LoginField
                                class="mb-6 group"
                                id="login-password"
                                label={copy::PASSWORD_LABEL}
                                input_type="password"
                                placeholder={copy::PASSWORD_PLACEHOLDER}
                                autocomplete="current-password"
                                value={form.password.clone()}
                                oninput={on_password}
                            />

                            <button
                                type="submit"
                                class="w-full bg-gradient-to-r from-blue-500 to-blue-600 text-white border-none p-3.5 rounded-lg font-bold cursor-pointer text-sm hover:from-blue-600 hover:to-blue-700 transition-all shadow-lg shadow-blue-500/30 transform hover:-translate-y-0.5 active:translate-y-0"
                            >
                                {copy::SUBMIT_LABEL}
                            </button>

                            <div class="flex justify-between text-xs text-slate-500 mt-6 px-1">
                                <a href={config.forgot_password_href.clone()} class="hover:text-blue-600 transition-colors">
                                    {copy::FORGOT_PASSWORD_LABEL}
                                </a>
                                <a href={config.create_account_href.clone()} class="hover:text-blue-600 transition-colors font-semibold">
                                    {copy::CREATE_ACCOUNT_LABEL}
                                </a>
                            </div>
                        </form>
                    </div>

                    <div class="hidden lg:block w-1/2" />
                </div>
            </div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct LoginFieldProps {
    class: Classes,
    id: AttrValue,
    label: AttrValue,
    input_type: AttrValue,
    placeholder: AttrValue,
    autocomplete: AttrValue,
    value: AttrValue,
    oninput: Callback<String>,
}

#[function_component(LoginField)]
fn login_field(props: &LoginFieldProps) -> Html {
    let oninput = {
        let oninput = props.oninput.clone();
        Callback::from(move |event: InputEvent| {
            if let Some(input) = event.target_dyn_into::<web_sys::HtmlInputElement>() {
                oninput.emit(input.value());
            }
        })
    };
    html! {
        <div class={props.class.clone()}>
            <label class={FIELD_LABEL_CLASS} for={props.id.clone()}>{props.label.clone()}</label>
            <input
                id={props.id.clone()}
                type={props.input_type.clone()}
                placeholder={props.placeholder.clone()}
                autocomplete={props.autocomplete.clone()}
                class={FIELD_INPUT_CLASS}
                value={props.value.clone()}
                oninput={oninput}
            />
        </div>
    }
}
