//! Login form state and client-side validation.
//!
//! # Design
//! - The form only checks that both fields carry something other than whitespace.
//! - Validation runs username first, so an empty form reports the username error.
//! - Accepted credentials are handed over verbatim; trimming is only used for the check.
//! - Field edits are applied as actions against the latest state, never against a render snapshot.

use crate::core::copy;
use std::fmt;
use thiserror::Error;

/// Credential pair handed to the login callback.
///
/// `Debug` redacts both fields so the pair can sit in log lines.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    /// Username exactly as typed.
    pub username: String,
    /// Password exactly as typed.
    pub password: String,
}

impl fmt::Debug for Credentials {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("Credentials")
            .field("username", &"<redacted>")
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Validation failures shown inline above the form fields.
#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
pub enum LoginError {
    /// Username was empty or whitespace-only.
    #[error("{}", copy::USERNAME_REQUIRED)]
    MissingUsername,
    /// Password was empty or whitespace-only.
    #[error("{}", copy::PASSWORD_REQUIRED)]
    MissingPassword,
}

/// Whether a field holds nothing but whitespace or byte-order marks.
#[must_use]
pub fn is_blank(value: &str) -> bool {
    value
        .trim_matches(|c: char| c.is_whitespace() || c == '\u{FEFF}')
        .is_empty()
}

/// Validate raw field values and build the credentials on success.
///
/// # Errors
/// Returns [`LoginError::MissingUsername`] when the username trims to nothing,
/// otherwise [`LoginError::MissingPassword`] when the password does.
pub fn validate_login(username: &str, password: &str) -> Result<Credentials, LoginError> {
    if is_blank(username) {
        return Err(LoginError::MissingUsername);
    }
    if is_blank(password) {
        return Err(LoginError::MissingPassword);
    }
    Ok(Credentials {
        username: username.to_string(),
        password: password.to_string(),
    })
}

/// State transitions of the login form.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LoginAction {
    /// The username field changed.
    SetUsername(String),
    /// The password field changed.
    SetPassword(String),
    /// A submit passed validation.
    Accept,
    /// A submit failed validation.
    Reject(LoginError),
}

/// Transient state of a rendered login form.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LoginForm {
    /// Current username field value.
    pub username: String,
    /// Current password field value.
    pub password: String,
    /// Error currently displayed, if any.
    pub error: Option<LoginError>,
}

impl LoginForm {
    /// Handle a submit: record the validation error, or clear it and pass the
    /// credentials to `on_login`.
    ///
    /// `on_login` runs at most once per call.
    pub fn submit(&mut self, on_login: impl FnOnce(Credentials)) {
        match validate_login(&self.username, &self.password) {
            Ok(credentials) => {
                self.apply(LoginAction::Accept);
                on_login(credentials);
            }
            Err(err) => self.apply(LoginAction::Reject(err)),
        }
    }

    /// Apply one transition; each field action only touches its own field.
    pub fn apply(&mut self, action: LoginAction) {
        match action {
            LoginAction::SetUsername(value) => self.username = value,
            LoginAction::SetPassword(value) => self.password = value,
            LoginAction::Accept => self.error = None,
            LoginAction::Reject(err) => self.error = Some(err),
        }
    }

    /// Outcome of [`LoginForm::submit`] as an action, for replaying onto a newer state.
    #[must_use]
    pub const fn outcome(&self) -> LoginAction {
        match self.error {
            Some(err) => LoginAction::Reject(err),
            None => LoginAction::Accept,
        }
    }

    /// Message for the error banner, if one should be shown.
    #[must_use]
    pub fn error_message(&self) -> Option<String> {
        self.error.map(|err| err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    fn form(username: &str, password: &str) -> LoginForm {
        LoginForm {
            username: username.to_string(),
            password: password.to_string(),
            error: None,
        }
    }

    fn submit_collecting(form: &mut LoginForm) -> Vec<Credentials> {
        let received = RefCell::new(Vec::new());
        form.submit(|credentials| received.borrow_mut().push(credentials));
        received.into_inner()
    }

    #[test]
    fn empty_username_shows_error_without_callback() {
        let mut form = form("", "secret");
        let received = submit_collecting(&mut form);
        assert!(received.is_empty());
        assert_eq!(form.error, Some(LoginError::MissingUsername));
        assert_eq!(
            form.error_message().as_deref(),
            Some("Por favor, insira seu nome de usuário")
        );
    }

    #[test]
    fn whitespace_username_is_rejected() {
        assert_eq!(
            validate_login("   ", "secret"),
            Err(LoginError::MissingUsername)
        );
    }

    #[test]
    fn blank_password_shows_error_without_callback() {
        for password in ["", "   ", "\t\n"] {
            let mut form = form("ana", password);
            let received = submit_collecting(&mut form);
            assert!(received.is_empty());
            assert_eq!(form.error, Some(LoginError::MissingPassword));
            assert_eq!(
                form.error_message().as_deref(),
                Some("Por favor, insira sua senha")
            );
        }
    }

    #[test]
    fn username_error_wins_when_both_empty() {
        assert_eq!(validate_login("", ""), Err(LoginError::MissingUsername));
    }

    #[test]
    fn valid_submit_emits_literal_values_once() {
        let mut form = form("  ana.souza ", " s3nha ");
        let received = submit_collecting(&mut form);
        assert_eq!(
            received,
            vec![Credentials {
                username: "  ana.souza ".to_string(),
                password: " s3nha ".to_string(),
            }]
        );
        assert_eq!(form.error, None);
    }

    #[test]
    fn valid_submit_clears_previous_error() {
        let mut form = form("", "");
        assert!(submit_collecting(&mut form).is_empty());
        assert!(form.error_message().is_some());

        form.username = "ana".to_string();
        form.password = "secret".to_string();
        assert_eq!(submit_collecting(&mut form).len(), 1);
        assert_eq!(form.error_message(), None);
    }

    #[test]
    fn byte_order_mark_only_username_is_blank() {
        assert_eq!(
            validate_login("\u{FEFF}", "x"),
            Err(LoginError::MissingUsername)
        );
        assert_eq!(
            validate_login("ana", " \u{FEFF}\u{00A0}"),
            Err(LoginError::MissingPassword)
        );
        assert!(!is_blank("\u{FEFF}ana"));
    }

    #[test]
    fn field_edits_in_one_batch_keep_both_values() {
        let mut form = LoginForm::default();
        form.apply(LoginAction::SetUsername("ana".to_string()));
        form.apply(LoginAction::SetPassword("pw".to_string()));
        assert_eq!(form.username, "ana");
        assert_eq!(form.password, "pw");

        let received = submit_collecting(&mut form);
        assert_eq!(received.len(), 1);
        assert_eq!(form.outcome(), LoginAction::Accept);
    }

    #[test]
    fn rejected_outcome_replays_error_without_touching_fields() {
        let mut snapshot = LoginForm::default();
        submit_collecting(&mut snapshot);
        assert_eq!(
            snapshot.outcome(),
            LoginAction::Reject(LoginError::MissingUsername)
        );

        let mut latest = form("ana", "");
        latest.apply(snapshot.outcome());
        assert_eq!(latest.username, "ana");
        assert_eq!(latest.error, Some(LoginError::MissingUsername));

        latest.apply(LoginAction::Accept);
        assert_eq!(latest.error_message(), None);
    }

    #[test]
    fn debug_output_hides_user_identifiers() {
        let credentials = Credentials {
            username: "ana.souza".to_string(),
            password: "s3nha".to_string(),
        };
        let rendered = format!("{credentials:?}");
        assert!(!rendered.contains("ana.souza"));
        assert!(!rendered.contains("s3nha"));
        assert!(rendered.contains("<redacted>"));
    }

    #[test]
    fn no_format_rules_beyond_presence() {
        let credentials = validate_login("a", "'; DROP TABLE users; --");
        assert!(credentials.is_ok());
    }
}
