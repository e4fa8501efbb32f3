use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use serde_json::Value;

use crate::errors::ShipItError;

pub fn v_path<'a>(root: &'a Value, path: &[&str]) -> Option<&'a Value> {
    let mut cur = root;
    for key in path {
        cur = cur.get(*key)?;
    }
    Some(cur)
}

pub fn v_str<'a>(root: &'a Value, path: &[&str]) -> Option<&'a str> {
    v_path(root, path).and_then(|v| v.as_str())
}

/// HTTP method of a function URL / HTTP API (v2) or REST API (v1) event.
pub fn request_method(payload: &Value) -> Option<&str> {
    v_str(payload, &["requestContext", "http", "method"])
        .or_else(|| v_str(payload, &["httpMethod"]))
}

pub fn get_header_value<'a>(payload: &'a Value, name: &str) -> Option<&'a str> {
    let headers = payload.get("headers")?;
    if let Some(v) = headers.get(name).and_then(|s| s.as_str()) {
        return Some(v);
    }
    headers.as_object().and_then(|map| {
        map.iter().find_map(|(k, v)| {
            if k.eq_ignore_ascii_case(name) {
                v.as_str()
            } else {
                None
            }
        })
    })
}

/// Request body, base64-decoded when the integration flagged it as encoded.
///
/// # Errors
///
/// Returns [`ShipItError::Parse`] if the body is missing, not a string, or not
/// valid base64/UTF-8 when encoded.
pub fn extract_body(payload: &Value) -> Result<String, ShipItError> {
    let body = payload
        .get("body")
        .and_then(Value::as_str)
        .ok_or_else(|| ShipItError::Parse("missing body".to_string()))?;

    let encoded = payload
        .get("isBase64Encoded")
        .and_then(Value::as_bool)
        .unwrap_or(false);
    if !encoded {
        return Ok(body.to_string());
    }

    let bytes = STANDARD.decode(body)?;
    String::from_utf8(bytes).map_err(|e| ShipItError::Parse(format!("body is not UTF-8: {e}")))
}
