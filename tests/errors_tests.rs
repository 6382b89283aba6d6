use std::error::Error;
use mention_relay::errors::RelayError;

#[test]
fn test_relay_error_implements_error_trait() {
    fn assert_error<T: Error>(_: &T) {}

    let error = RelayError::InvalidEvent("test error".to_string());
    assert_error(&error);
}

#[test]
fn test_relay_error_display() {
    let error = RelayError::EventError("No blocks found in app mention event".to_string());
    assert_eq!(
        format!("{error}"),
        "Failed to process Slack event: No blocks found in app mention event"
    );

    let error = RelayError::LlmError("LLM API request failed: timeout".to_string());
    assert_eq!(
        format!("{error}"),
        "LLM API request failed: timeout"
    );

    let error =
        RelayError::WebhookError("Failed to send Slack message: connection refused".to_string());
    assert_eq!(
        format!("{error}"),
        "Failed to send Slack message: connection refused"
    );

    let error = RelayError::ConfigError("LLM_API_URL".to_string());
    assert_eq!(format!("{error}"), "Configuration error: LLM_API_URL");
}

#[test]
fn test_relay_error_message_drops_prefix() {
    let error = RelayError::InvalidEvent("Event body is empty".to_string());
    assert_eq!(error.message(), "Event body is empty");

    let error = RelayError::EventError("Message text is empty".to_string());
    assert_eq!(error.message(), "Message text is empty");

    let error = RelayError::ConfigError("LLM_API_URL".to_string());
    assert_eq!(error.message(), "LLM_API_URL");
}

#[test]
fn test_relay_error_from_json_error() {
    let json_err = serde_json::from_str::<serde_json::Value>("{not json").unwrap_err();
    let err: RelayError = json_err.into();

    match err {
        RelayError::InvalidEvent(msg) => assert!(msg.starts_with("Invalid JSON in event body")),
        other => panic!("Unexpected error type: {other:?}"),
    }
}
