//! User-facing Portuguese copy rendered by the components.
//!
//! Strings live here instead of inline in `html!` blocks so the DOM-free
//! tests can assert on exactly what the browser shows.

/// Login card heading.
pub const LOGIN_TITLE: &str = "Bem-vindo";
/// Prefix of the login card subtitle; the product name is appended.
pub const LOGIN_SUBTITLE_PREFIX: &str = "Insira seus dados para acessar o";
/// Username field label.
pub const USERNAME_LABEL: &str = "Usuário";
/// Username field placeholder.
pub const USERNAME_PLACEHOLDER: &str = "Seu usuário";
/// Password field label.
pub const PASSWORD_LABEL: &str = "Senha";
/// Password field placeholder.
pub const PASSWORD_PLACEHOLDER: &str = "Sua senha";
/// Submit button caption.
pub const SUBMIT_LABEL: &str = "ACESSAR SISTEMA";
/// Forgotten-password link caption.
pub const FORGOT_PASSWORD_LABEL: &str = "Esqueceu a Senha?";
/// Account-creation link caption.
pub const CREATE_ACCOUNT_LABEL: &str = "Criar Conta";
/// Alt text of the floating dashboard illustration.
pub const ILLUSTRATION_ALT: &str = "Dashboard Analytics Mockup";

/// Shown when the username is empty or whitespace-only.
pub const USERNAME_REQUIRED: &str = "Por favor, insira seu nome de usuário";
/// Shown when the password is empty or whitespace-only.
pub const PASSWORD_REQUIRED: &str = "Por favor, insira sua senha";

/// Settings screen heading.
pub const SETTINGS_TITLE: &str = "Configurações";
/// Greeting prefix in the settings header; the username is appended.
pub const GREETING_PREFIX: &str = "Olá,";

/// Theme toggle label while the light theme is active.
pub const ENABLE_DARK_MODE: &str = "Ativar modo escuro";
/// Theme toggle label while the dark theme is active.
pub const ENABLE_LIGHT_MODE: &str = "Ativar modo claro";

/// Full login subtitle for the configured product name.
#[must_use]
pub fn login_subtitle(product_name: &str) -> String {
    format!("{LOGIN_SUBTITLE_PREFIX} {product_name}")
}

/// Header greeting for the signed-in username.
#[must_use]
pub fn greeting(username: &str) -> String {
    format!("{GREETING_PREFIX} {username}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn subtitle_appends_product_name() {
        assert_eq!(
            login_subtitle("AgilePulse"),
            "Insira seus dados para acessar o AgilePulse"
        );
    }

    #[test]
    fn greeting_keeps_username_verbatim() {
        assert_eq!(greeting(" ana "), "Olá,  ana ");
    }
}
