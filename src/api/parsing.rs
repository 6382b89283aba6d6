use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use serde_json::Value;

use crate::errors::RelayError;

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

pub fn v_array<'a>(root: &'a Value, path: &[&str]) -> Option<&'a Vec<Value>> {
    v_path(root, path).and_then(|v| v.as_array())
}

pub fn get_header_value<'a>(headers: &'a Value, name: &str) -> Option<&'a str> {
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

/// Returns the request body as text exactly as Slack sent it.
///
/// A missing `body` key reads as `"{}"`. A null or empty body is rejected.
/// Base64 bodies (`isBase64Encoded`) are decoded, and a body that is already a
/// JSON document (direct invocation) is re-serialized.
pub fn body_text(payload: &Value) -> Result<String, RelayError> {
    let Some(body) = payload.get("body") else {
        return Ok("{}".to_string());
    };

    match body {
        Value::Null => Err(RelayError::InvalidEvent("Event body is empty".to_string())),
        Value::String(s) if s.is_empty() => {
            Err(RelayError::InvalidEvent("Event body is empty".to_string()))
        }
        Value::String(s) => {
            let encoded = payload
                .get("isBase64Encoded")
                .and_then(Value::as_bool)
                .unwrap_or(false);
            if encoded {
                let bytes = STANDARD.decode(s.as_bytes()).map_err(|e| {
                    RelayError::InvalidEvent(format!("Failed to decode base64 body: {}", e))
                })?;
                let decoded = String::from_utf8(bytes).map_err(|e| {
                    RelayError::InvalidEvent(format!("Event body is not UTF-8: {}", e))
                })?;
                if decoded.is_empty() {
                    return Err(RelayError::InvalidEvent("Event body is empty".to_string()));
                }
                Ok(decoded)
            } else {
                Ok(s.clone())
            }
        }
        Value::Object(_) | Value::Array(_) => Ok(body.to_string()),
        _ => Err(RelayError::InvalidEvent("Invalid body format".to_string())),
    }
}
