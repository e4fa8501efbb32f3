//! reqwest-backed [`Gateway`] talking to the real Telegram and GitHub APIs.

use async_trait::async_trait;
use once_cell::sync::Lazy;
use reqwest::Client;
use reqwest::header::{ACCEPT, AUTHORIZATION, CONTENT_TYPE, USER_AGENT};
use serde::Serialize;
use std::time::Duration;
use tracing::{debug, info};

use super::Gateway;
use crate::core::config::AppConfig;
use crate::core::models::{DispatchPayload, DispatchResponse};
use crate::errors::ShipItError;

pub const GITHUB_USER_AGENT: &str = "ShipIt-Bot";
const GITHUB_ACCEPT: &str = "application/vnd.github.v3+json";

static HTTP_CLIENT: Lazy<Client> = Lazy::new(|| {
    Client::builder()
        .timeout(Duration::from_secs(30))
        .build()
        .expect("Failed to create HTTP client")
});

#[derive(Debug, Serialize)]
struct SendMessageRequest<'a> {
    chat_id: i64,
    text: &'a str,
    parse_mode: &'static str,
}

pub struct HttpGateway {
    send_message_url: String,
    github_api_base: String,
    github_pat: String,
}

impl HttpGateway {
    #[must_use]
    pub fn new(config: &AppConfig) -> Self {
        Self {
            send_message_url: format!(
                "{}/bot{}/sendMessage",
                config.telegram_api_base.trim_end_matches('/'),
                config.telegram_bot_token
            ),
            github_api_base: config.github_api_base.trim_end_matches('/').to_string(),
            github_pat: config.github_pat.clone(),
        }
    }

    fn dispatch_url(&self, repo: &str) -> String {
        format!("{}/repos/{repo}/dispatches", self.github_api_base)
    }
}

#[async_trait]
impl Gateway for HttpGateway {
    async fn send_message(&self, chat_id: i64, text: &str) -> Result<(), ShipItError> {
        let request = SendMessageRequest {
            chat_id,
            text,
            parse_mode: "Markdown",
        };

        let response = HTTP_CLIENT
            .post(&self.send_message_url)
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        if status.is_success() {
            debug!(chat_id, "Telegram message sent");
            Ok(())
        } else {
            let body = response.text().await.unwrap_or_default();
            Err(ShipItError::Telegram(format!("{status}: {body}")))
        }
    }

    async fn trigger_dispatch(
        &self,
        repo: &str,
        payload: &DispatchPayload,
    ) -> Result<DispatchResponse, ShipItError> {
        let response = HTTP_CLIENT
            .post(self.dispatch_url(repo))
            .header(AUTHORIZATION, format!("Bearer {}", self.github_pat))
            .header(ACCEPT, GITHUB_ACCEPT)
            .header(USER_AGENT, GITHUB_USER_AGENT)
            .header(CONTENT_TYPE, "application/json")
            .json(payload)
            .send()
            .await?;

        let status = response.status().as_u16();
        let body = response.text().await?;
        info!(repo, status, "repository_dispatch completed");

        Ok(DispatchResponse { status, body })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(telegram: &str, github: &str) -> AppConfig {
        AppConfig {
            telegram_bot_token: "123:abc".to_string(),
            allowed_user_id: "42".to_string(),
            github_pat: "ghp_test".to_string(),
            projects: None,
            webhook_secret: None,
            telegram_api_base: telegram.to_string(),
            github_api_base: github.to_string(),
        }
    }

    #[test]
    fn test_urls_strip_trailing_slash() {
        let gateway = HttpGateway::new(&config("https://tg.example/", "https://gh.example/"));
        assert_eq!(
            gateway.send_message_url,
            "https://tg.example/bot123:abc/sendMessage"
        );
        assert_eq!(
            gateway.dispatch_url("acme/site"),
            "https://gh.example/repos/acme/site/dispatches"
        );
    }

    #[test]
    fn test_send_message_request_serialization() {
        let request = SendMessageRequest {
            chat_id: -100,
            text: "hello",
            parse_mode: "Markdown",
        };
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["chat_id"], -100);
        assert_eq!(json["text"], "hello");
        assert_eq!(json["parse_mode"], "Markdown");
    }
}
