//! Lambda handler - validates the proxy request and hands the body to the relay.

use lambda_runtime::{Error, LambdaEvent};
use serde_json::Value;
use tracing::{Span, error, info, warn};
use uuid::Uuid;

use super::{helpers, parsing, relay};
use crate::core::config::AppConfig;
use crate::gateway::{Gateway, HttpGateway};

pub use self::function_handler as handler;

pub const SECRET_TOKEN_HEADER: &str = "X-Telegram-Bot-Api-Secret-Token";

/// Lambda handler for the webhook entrypoint.
///
/// Configuration is read from the environment on every invocation.
///
/// # Errors
///
/// Never returns an error; failures become a 500 proxy response.
#[tracing::instrument(level = "info", skip(event), fields(request_id = tracing::field::Empty))]
pub async fn function_handler(event: LambdaEvent<Value>) -> Result<Value, Error> {
    let request_id = if event.context.request_id.is_empty() {
        Uuid::new_v4().to_string()
    } else {
        event.context.request_id.clone()
    };
    Span::current().record("request_id", request_id.as_str());

    let config = match AppConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            error!("Config error: {}", e);
            return Ok(helpers::internal_error());
        }
    };
    let gateway = HttpGateway::new(&config);

    Ok(route(&config, &gateway, &event.payload).await)
}

/// Route a proxy event and build the proxy response.
pub async fn route<G: Gateway + ?Sized>(config: &AppConfig, gateway: &G, payload: &Value) -> Value {
    let method = parsing::request_method(payload).unwrap_or_default();
    if !method.eq_ignore_ascii_case("POST") {
        info!(method, "Non-POST request, answering health check");
        return helpers::alive();
    }

    if !secret_token_matches(config, payload) {
        warn!("Webhook secret token mismatch");
        return helpers::unauthorized();
    }

    let body = match parsing::extract_body(payload) {
        Ok(body) => body,
        Err(e) => {
            error!("Failed to handle update: {}", e);
            return helpers::internal_error();
        }
    };

    match relay::handle_update(config, gateway, &body).await {
        Ok(outcome) => {
            info!(?outcome, "Update handled");
            helpers::ok()
        }
        Err(e) => {
            error!("Failed to handle update: {}", e);
            helpers::internal_error()
        }
    }
}

fn secret_token_matches(config: &AppConfig, payload: &Value) -> bool {
    match &config.webhook_secret {
        None => true,
        Some(expected) => {
            parsing::get_header_value(payload, SECRET_TOKEN_HEADER) == Some(expected.as_str())
        }
    }
}
