//! Guarded JSON parsing.

use serde::de::DeserializeOwned;

/// Attempt to parse a string as JSON, swallowing the error.
///
/// Returns `Some(value)` on success and `None` on any parse failure; the
/// parse error itself is never propagated. Callers that must tell a
/// legitimate JSON `null` apart from a failed parse can target
/// `Option<serde_json::Value>` and inspect for `Value::Null`; in practice
/// callers treat either as unusable.
pub fn json_parse_helper<T: DeserializeOwned>(s: &str) -> Option<T> {
    serde_json::from_str(s).ok()
}
