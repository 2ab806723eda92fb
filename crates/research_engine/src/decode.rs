use serde_json::Value;

use crate::{AskReply, DocumentRecord, GatewayError, IngestReceipt};

/// Message used when a failed response carries no usable `detail`.
pub const FALLBACK_FAILURE: &str = "Failed";

/// Parse a response body as JSON, then classify it by status.
///
/// The body is parsed before the status is checked: an unparsable body is a
/// transport failure even when the status signals an error.
pub fn decode_body(status: u16, bytes: &[u8]) -> Result<Value, GatewayError> {
    let body: Value = serde_json::from_slice(bytes)
        .map_err(|err| GatewayError::transport(format!("invalid JSON response: {err}")))?;

    if (200..300).contains(&status) {
        return Ok(body);
    }

    let message = match body.get("detail") {
        Some(Value::String(detail)) if !detail.is_empty() => detail.clone(),
        Some(Value::String(_)) | Some(Value::Null) | None => FALLBACK_FAILURE.to_string(),
        Some(other) => other.to_string(),
    };
    Err(GatewayError::Operation { status, message })
}

pub fn receipt_from(body: &Value) -> IngestReceipt {
    let text = |key: &str| body.get(key).and_then(Value::as_str).map(str::to_owned);
    IngestReceipt {
        message: text("message"),
        detail: text("detail"),
    }
}

/// Reads `items`; absent, null or malformed lists count as empty.
pub fn documents_from(body: &Value) -> Vec<DocumentRecord> {
    body.get("items")
        .cloned()
        .and_then(|items| serde_json::from_value::<Vec<DocumentRecord>>(items).ok())
        .unwrap_or_default()
}

/// Reads `answer` and `steps` with per-field fallbacks.
pub fn ask_reply_from(body: &Value) -> AskReply {
    let answer = match body.get("answer") {
        Some(Value::String(answer)) => answer.clone(),
        Some(Value::Null) | None => String::new(),
        Some(other) => other.to_string(),
    };
    let steps = body
        .get("steps")
        .cloned()
        .and_then(|steps| serde_json::from_value(steps).ok())
        .unwrap_or_default();
    AskReply { answer, steps }
}
