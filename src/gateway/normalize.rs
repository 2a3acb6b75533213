// SPDX-License-Identifier: MPL-2.0
//! Error body normalization.
//!
//! The backend reports failures in several shapes:
//!
//! - `{"error": "Booking not found"}`
//! - `{"field": ["message", ...]}` (validation errors)
//! - `{"field": [{"string": "message", "code": "invalid"}]}` (serialized error details)
//! - `{"field": "message"}`
//! - `["message", ...]` (non-field errors)
//!
//! [`normalize`] folds all of them into one display string plus the list of
//! individual messages it was built from. It never fails.

use serde_json::Value;

/// Message used when nothing readable can be extracted.
pub const FALLBACK_MESSAGE: &str = "Something went wrong";

/// Separator between extracted messages.
pub const SEPARATOR: &str = ". ";

/// Result of normalizing an error body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Normalized {
    pub message: String,
    /// Individual field messages, in field-then-element order. Empty when
    /// the message came from the `error` envelope or the fallback.
    pub details: Vec<String>,
}

/// Folds an error body into a single message.
#[must_use]
pub fn normalize(body: &Value) -> Normalized {
    if let Some(message) = body.get("error").and_then(truthy_text) {
        return Normalized {
            message,
            details: Vec::new(),
        };
    }

    let details = field_messages(body);
    let message = if details.is_empty() {
        FALLBACK_MESSAGE.to_string()
    } else {
        details.join(SEPARATOR)
    };

    Normalized { message, details }
}

/// Shortcut returning only the display string.
#[must_use]
pub fn normalize_error(body: &Value) -> String {
    normalize(body).message
}

fn field_messages(body: &Value) -> Vec<String> {
    let values: Box<dyn Iterator<Item = &Value>> = match body {
        Value::Object(map) => Box::new(map.values()),
        Value::Array(items) => Box::new(items.iter()),
        _ => return Vec::new(),
    };

    let mut messages = Vec::new();
    for value in values {
        match value {
            Value::Array(items) => messages.extend(items.iter().filter_map(element_message)),
            Value::String(text) => messages.push(text.clone()),
            _ => {}
        }
    }
    messages
}

/// One element of a per-field message list.
fn element_message(element: &Value) -> Option<String> {
    match element {
        Value::String(text) => Some(text.clone()),
        Value::Object(map) => Some(
            map.get("string")
                .and_then(truthy_text)
                .unwrap_or_else(|| element.to_string()),
        ),
        Value::Array(_) => Some(element.to_string()),
        Value::Null | Value::Bool(_) | Value::Number(_) => None,
    }
}

/// Text of a value that counts as present: empty strings, zero, `false`
/// and `null` do not. Objects and arrays are rendered as compact JSON.
fn truthy_text(value: &Value) -> Option<String> {
    match value {
        Value::Null | Value::Bool(false) => None,
        Value::Bool(true) => Some("true".to_string()),
        Value::String(text) if text.is_empty() => None,
        Value::String(text) => Some(text.clone()),
        Value::Number(number) if number.as_f64() == Some(0.0) => None,
        Value::Number(number) => Some(number.to_string()),
        Value::Object(_) | Value::Array(_) => Some(value.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn error_envelope_is_used_verbatim() {
        let body = json!({"error": "Booking cannot be cancelled"});
        assert_eq!(normalize_error(&body), "Booking cannot be cancelled");
        assert!(normalize(&body).details.is_empty());
    }

    #[test]
    fn error_envelope_wins_over_other_fields() {
        let body = json!({"detail": ["ignored"], "error": "Invalid credentials"});
        assert_eq!(normalize_error(&body), "Invalid credentials");
    }

    #[test]
    fn field_arrays_join_in_field_then_element_order() {
        let body = json!({
            "number_of_seats": ["Ensure this value is greater than or equal to 1."],
            "passenger_details": ["This field is required.", "Expected a list."]
        });
        let normalized = normalize(&body);
        assert_eq!(
            normalized.message,
            "Ensure this value is greater than or equal to 1.. This field is required.. Expected a list."
        );
        assert_eq!(normalized.details.len(), 3);
    }

    #[test]
    fn structured_details_use_their_string_property() {
        let body = json!({
            "name": [{"string": "Required"}],
            "age": ["Must be positive"]
        });
        assert_eq!(normalize_error(&body), "Required. Must be positive");
    }

    #[test]
    fn other_objects_are_serialized_for_diagnosis() {
        let body = json!({"travel_option": [{"code": "does_not_exist", "pk": 99}]});
        assert_eq!(
            normalize_error(&body),
            r#"{"code":"does_not_exist","pk":99}"#
        );
    }

    #[test]
    fn empty_string_property_falls_back_to_serialization() {
        let body = json!({"name": [{"string": ""}]});
        assert_eq!(normalize_error(&body), r#"{"string":""}"#);
    }

    #[test]
    fn plain_string_fields_are_used() {
        let body = json!({"password": "Password fields didn't match."});
        assert_eq!(normalize_error(&body), "Password fields didn't match.");
    }

    #[test]
    fn nested_objects_and_scalars_are_skipped() {
        let body = json!({
            "user": {"email": ["Enter a valid email address."]},
            "count": 3,
            "flags": [true, null, 4],
            "seats": ["Not enough seats"]
        });
        assert_eq!(normalize_error(&body), "Not enough seats");
    }

    #[test]
    fn top_level_list_is_walked_like_a_mapping() {
        let body = json!(["Departure must be before arrival."]);
        assert_eq!(normalize_error(&body), "Departure must be before arrival.");
    }

    #[test]
    fn empty_or_unrecognized_bodies_fall_back() {
        assert_eq!(normalize_error(&json!({})), FALLBACK_MESSAGE);
        assert_eq!(normalize_error(&json!([])), FALLBACK_MESSAGE);
        assert_eq!(normalize_error(&json!(null)), FALLBACK_MESSAGE);
        assert_eq!(normalize_error(&json!("Server Error")), FALLBACK_MESSAGE);
        assert_eq!(normalize_error(&json!(500)), FALLBACK_MESSAGE);
        assert_eq!(normalize_error(&json!({"detail": {"nested": 1}})), FALLBACK_MESSAGE);
    }

    #[test]
    fn falsy_error_field_falls_through_to_fields() {
        let body = json!({"error": null, "seats": ["Not enough seats"]});
        assert_eq!(normalize_error(&body), "Not enough seats");

        let body = json!({"error": false});
        assert_eq!(normalize_error(&body), FALLBACK_MESSAGE);
    }

    #[test]
    fn non_string_error_field_is_rendered_as_text() {
        assert_eq!(normalize_error(&json!({"error": 404})), "404");
        assert_eq!(
            normalize_error(&json!({"error": {"code": "gone"}})),
            r#"{"code":"gone"}"#
        );
    }
}
