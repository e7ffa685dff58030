//! Store configuration injected at startup.
//!
//! Values come from environment variables (with the demo store's defaults) or
//! from a JSON document. Both paths run [`StoreConfig::validate`].

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{StorefrontError, StorefrontResult};

pub const ENV_STORE_NAME: &str = "LUXOR_STORE_NAME";
pub const ENV_SUPPORT_PHONE: &str = "LUXOR_SUPPORT_PHONE";
pub const ENV_CURRENCY: &str = "LUXOR_CURRENCY";
pub const ENV_LOCALE: &str = "LUXOR_LOCALE";
pub const ENV_INSTAGRAM: &str = "LUXOR_INSTAGRAM";
pub const ENV_SALES_EMAIL: &str = "LUXOR_SALES_EMAIL";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StoreConfig {
    pub store_name: String,
    /// International number, digits only (e.g. `5598999999999`); used for WhatsApp links.
    pub support_phone: String,
    /// ISO 4217 code (e.g. `BRL`).
    pub currency_code: String,
    /// BCP 47 tag used for price formatting (e.g. `pt-BR`).
    pub locale: String,
    pub instagram_handle: String,
    pub sales_email: String,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            store_name: "LUXOR SLZ".to_string(),
            support_phone: "5598999999999".to_string(),
            currency_code: "BRL".to_string(),
            locale: "pt-BR".to_string(),
            instagram_handle: "yourstore".to_string(),
            sales_email: "sales@luxorslz.com".to_string(),
        }
    }
}

impl StoreConfig {
    /// Defaults overridden by any `LUXOR_*` variables present in the environment.
    pub fn from_env() -> StorefrontResult<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`from_env`](Self::from_env) with an injectable variable source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> StorefrontResult<Self> {
        let mut config = Self::default();
        let fields: [(&str, &mut String); 6] = [
            (ENV_STORE_NAME, &mut config.store_name),
            (ENV_SUPPORT_PHONE, &mut config.support_phone),
            (ENV_CURRENCY, &mut config.currency_code),
            (ENV_LOCALE, &mut config.locale),
            (ENV_INSTAGRAM, &mut config.instagram_handle),
            (ENV_SALES_EMAIL, &mut config.sales_email),
        ];
        for (key, slot) in fields {
            if let Some(value) = lookup(key) {
                debug!(key, "store config override from environment");
                *slot = value.trim().to_string();
            }
        }
        config.normalize();
        config.validate()?;
        Ok(config)
    }

    pub fn from_json_str(json: &str) -> StorefrontResult<Self> {
        let mut config: Self = serde_json::from_str(json)?;
        config.normalize();
        config.validate()?;
        Ok(config)
    }

    pub fn from_json_file(path: impl AsRef<Path>) -> StorefrontResult<Self> {
        let contents = std::fs::read_to_string(path.as_ref())?;
        Self::from_json_str(&contents)
    }

    fn normalize(&mut self) {
        self.currency_code = self.currency_code.trim().to_ascii_uppercase();
        self.support_phone = self
            .support_phone
            .chars()
            .filter(|c| !matches!(c, ' ' | '-' | '(' | ')' | '+'))
            .collect();
        self.instagram_handle = self.instagram_handle.trim().trim_start_matches('@').to_string();
    }

    pub fn validate(&self) -> StorefrontResult<()> {
        if self.store_name.trim().is_empty() {
            return Err(StorefrontError::config("store_name cannot be empty"));
        }
        if self.support_phone.is_empty() || !self.support_phone.chars().all(|c| c.is_ascii_digit())
        {
            return Err(StorefrontError::config(format!(
                "support_phone must contain digits only (got `{}`)",
                self.support_phone
            )));
        }
        if self.currency_code.len() != 3
            || !self.currency_code.chars().all(|c| c.is_ascii_uppercase())
        {
            return Err(StorefrontError::config(format!(
                "currency_code must be a 3-letter ISO 4217 code (got `{}`)",
                self.currency_code
            )));
        }
        if self.locale.trim().is_empty() {
            return Err(StorefrontError::config("locale cannot be empty"));
        }
        if self.instagram_handle.is_empty()
            || !self
                .instagram_handle
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '.' || c == '_')
        {
            return Err(StorefrontError::config(format!(
                "instagram_handle is not a valid handle (got `{}`)",
                self.instagram_handle
            )));
        }
        if !crate::newsletter::looks_like_email(&self.sales_email) {
            return Err(StorefrontError::config(format!(
                "sales_email is not an email address (got `{}`)",
                self.sales_email
            )));
        }
        Ok(())
    }
}
