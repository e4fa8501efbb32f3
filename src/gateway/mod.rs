//! Outbound calls to Telegram and the GitHub dispatch API

pub mod http;

use async_trait::async_trait;
use tracing::warn;

use crate::core::models::{DispatchPayload, DispatchResponse};
use crate::errors::ShipItError;

pub use http::HttpGateway;

/// The two outbound operations the relay performs.
#[async_trait]
pub trait Gateway: Send + Sync {
    /// Send a Markdown message to a chat.
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure or a non-success Telegram status.
    async fn send_message(&self, chat_id: i64, text: &str) -> Result<(), ShipItError>;

    /// Fire a `repository_dispatch` event at `repo` (`owner/repo`).
    ///
    /// A non-success status is returned as a [`DispatchResponse`], not an error.
    ///
    /// # Errors
    ///
    /// Returns an error only when the request could not be completed.
    async fn trigger_dispatch(
        &self,
        repo: &str,
        payload: &DispatchPayload,
    ) -> Result<DispatchResponse, ShipItError>;
}

/// Best-effort chat notification. Failures are logged, never propagated.
///
/// Returns whether the message was delivered.
pub async fn notify<G: Gateway + ?Sized>(gateway: &G, chat_id: i64, text: &str) -> bool {
    match gateway.send_message(chat_id, text).await {
        Ok(()) => true,
        Err(e) => {
            warn!(chat_id, error = %e, "Telegram send failed");
            false
        }
    }
}
