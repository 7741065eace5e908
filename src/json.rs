//! JSON helpers shared by the error types.

use serde::Serialize;

/// Serialize `value`, degrading to a message-only document on failure.
pub(crate) fn to_json_or_fallback<T: Serialize + ?Sized>(value: &T, message: &str) -> String {
    serde_json::to_string(value).unwrap_or_else(|e| {
        tracing::warn!("Failed to serialize error: {}", e);
        serde_json::json!({ "message": message }).to_string()
    })
}
