use super::*;

#[test]
fn body_message_prefers_message_over_error() {
    let body = serde_json::json!({"message": "m1", "error": "m2"});
    assert_eq!(body_message(&body), Some("m1"));

    let body = serde_json::json!({"error": "m2"});
    assert_eq!(body_message(&body), Some("m2"));
}

#[test]
fn body_message_ignores_non_string_fields() {
    let body = serde_json::json!({"message": 42, "error": {"code": 7}});
    assert_eq!(body_message(&body), None);
}

#[test]
fn body_message_none_for_empty_body() {
    assert_eq!(body_message(&serde_json::json!({})), None);
}
