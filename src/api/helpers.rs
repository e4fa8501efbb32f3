//! Response builders for the Lambda proxy integration.

use serde_json::{Value, json};

pub const ALIVE_BODY: &str = "ShipIt is running! Send me a Telegram message.";
pub const OK_BODY: &str = "OK";
pub const INTERNAL_ERROR_BODY: &str = "Internal Error";
pub const UNAUTHORIZED_BODY: &str = "Unauthorized";

/// Plain-text proxy response with the given status.
#[must_use]
pub fn text_response(status_code: u16, body: &str) -> Value {
    json!({
        "statusCode": status_code,
        "headers": { "Content-Type": "text/plain; charset=utf-8" },
        "body": body
    })
}

/// Reply to non-POST probes.
#[must_use]
pub fn alive() -> Value {
    text_response(200, ALIVE_BODY)
}

#[must_use]
pub fn ok() -> Value {
    text_response(200, OK_BODY)
}

#[must_use]
pub fn unauthorized() -> Value {
    text_response(401, UNAUTHORIZED_BODY)
}

#[must_use]
pub fn internal_error() -> Value {
    text_response(500, INTERNAL_ERROR_BODY)
}
