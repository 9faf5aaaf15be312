//! Host-page configuration for the UI.
//!
//! # Design
//! - The host page may embed a JSON object in `<script id="agilepulse-config">`.
//! - Every field is optional; missing fields keep their defaults and unknown keys are ignored.
//! - Parsing stays DOM-free so the browser layer only has to hand over the text.

use serde::Deserialize;
use thiserror::Error;

/// Element id of the JSON configuration block in the host page.
pub const CONFIG_ELEMENT_ID: &str = "agilepulse-config";

const DEFAULT_PRODUCT_NAME: &str = "AgilePulse";
const DEFAULT_ILLUSTRATION_SRC: &str = "/login-mockup-final.png";
const DEFAULT_LINK_HREF: &str = "#";

/// Errors raised while reading the configuration block.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The block was not valid JSON or had mistyped fields.
    #[error("invalid ui config: {0}")]
    Parse(#[from] serde_json::Error),
    /// A field that must carry text was blank.
    #[error("ui config field `{field}` must not be blank")]
    BlankField {
        /// Name of the offending field.
        field: &'static str,
    },
}

/// Branding and link targets used by the login card and settings header.
#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
#[serde(default, rename_all = "camelCase")]
pub struct UiConfig {
    /// Product name shown in the login subtitle and settings header.
    pub product_name: String,
    /// Path of the dashboard illustration next to the login card.
    pub illustration_src: String,
    /// Target of the "forgot password" link.
    pub forgot_password_href: String,
    /// Target of the "create account" link.
    pub create_account_href: String,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            product_name: DEFAULT_PRODUCT_NAME.to_string(),
            illustration_src: DEFAULT_ILLUSTRATION_SRC.to_string(),
            forgot_password_href: DEFAULT_LINK_HREF.to_string(),
            create_account_href: DEFAULT_LINK_HREF.to_string(),
        }
    }
}

impl UiConfig {
    /// Parse the host page's JSON block.
    ///
    /// Blank or whitespace-only input yields the defaults.
    ///
    /// # Errors
    /// Returns [`ConfigError::Parse`] for malformed JSON and
    /// [`ConfigError::BlankField`] when the product name or illustration path is blank.
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        if raw.trim().is_empty() {
            return Ok(Self::default());
        }
        let config: Self = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.product_name.trim().is_empty() {
            return Err(ConfigError::BlankField {
                field: "productName",
            });
        }
        if self.illustration_src.trim().is_empty() {
            return Err(ConfigError::BlankField {
                field: "illustrationSrc",
            });
        }
        Ok(())
    }
}
