use thiserror::Error;

#[derive(Debug, Error)]
pub enum ShipItError {
    #[error("Missing configuration: {0}")]
    Config(String),

    #[error("Failed to parse Telegram update: {0}")]
    Parse(String),

    #[error("Failed to send HTTP request: {0}")]
    Http(String),

    #[error("Telegram API rejected the request: {0}")]
    Telegram(String),
}

impl From<reqwest::Error> for ShipItError {
    fn from(error: reqwest::Error) -> Self {
        ShipItError::Http(error.to_string())
    }
}

impl From<serde_json::Error> for ShipItError {
    fn from(error: serde_json::Error) -> Self {
        ShipItError::Parse(error.to_string())
    }
}

impl From<base64::DecodeError> for ShipItError {
    fn from(error: base64::DecodeError) -> Self {
        ShipItError::Parse(format!("invalid base64 body: {error}"))
    }
}

/// A single malformed entry in the `PROJECTS` string.
///
/// Never surfaced past [`crate::core::projects::parse_projects`], which logs it
/// and degrades to an empty project list.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ProjectParseError {
    #[error("project entry '{0}' has an empty name")]
    EmptyName(String),

    #[error("project '{0}' is missing a repository")]
    MissingRepo(String),

    #[error("project '{name}' has repository '{repo}', expected owner/repo")]
    InvalidRepo { name: String, repo: String },
}
