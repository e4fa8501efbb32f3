use std::env;

use crate::errors::ShipItError;

pub const DEFAULT_TELEGRAM_API_BASE: &str = "https://api.telegram.org";
pub const DEFAULT_GITHUB_API_BASE: &str = "https://api.github.com";

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub telegram_bot_token: String,
    pub allowed_user_id: String,
    pub github_pat: String,
    /// Raw `PROJECTS` value, parsed per request by
    /// [`crate::core::projects::parse_projects`].
    pub projects: Option<String>,
    pub webhook_secret: Option<String>,
    pub telegram_api_base: String,
    pub github_api_base: String,
}

impl AppConfig {
    /// # Errors
    ///
    /// Returns [`ShipItError::Config`] naming the first required variable that is unset.
    pub fn from_env() -> Result<Self, ShipItError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Build the configuration from any variable source.
    ///
    /// # Errors
    ///
    /// Returns [`ShipItError::Config`] naming the first required variable that is unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ShipItError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required = |name: &str| {
            lookup(name).ok_or_else(|| ShipItError::Config(format!("{name} is not set")))
        };

        Ok(Self {
            telegram_bot_token: required("TELEGRAM_BOT_TOKEN")?,
            allowed_user_id: required("ALLOWED_TELEGRAM_USER_ID")?.trim().to_string(),
            github_pat: required("GITHUB_PAT")?,
            projects: lookup("PROJECTS"),
            webhook_secret: lookup("TELEGRAM_WEBHOOK_SECRET").filter(|s| !s.is_empty()),
            telegram_api_base: lookup("TELEGRAM_API_BASE")
                .unwrap_or_else(|| DEFAULT_TELEGRAM_API_BASE.to_string()),
            github_api_base: lookup("GITHUB_API_BASE")
                .unwrap_or_else(|| DEFAULT_GITHUB_API_BASE.to_string()),
        })
    }
}
