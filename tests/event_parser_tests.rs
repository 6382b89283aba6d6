use mention_relay::core::models::SlackEvent;
use mention_relay::errors::RelayError;
use mention_relay::slack::event_parser::{extract_message_text, parse_slack_event};
use serde_json::{Value, json};

fn gateway(body: &Value) -> Value {
    json!({ "body": body.to_string() })
}

fn mention_body(sub_elements: Value) -> Value {
    json!({
        "type": "event_callback",
        "event": {
            "type": "app_mention",
            "channel": "C123",
            "blocks": [
                {
                    "type": "rich_text",
                    "elements": [
                        { "type": "rich_text_section", "elements": sub_elements }
                    ]
                }
            ]
        }
    })
}

fn mention_event(event_data: Value) -> SlackEvent {
    SlackEvent {
        event_type: "app_mention".to_string(),
        event_data,
        challenge: None,
    }
}

#[test]
fn test_parse_url_verification() {
    let raw = gateway(&json!({ "type": "url_verification", "challenge": "3eZbrw1a" }));

    let event = parse_slack_event(&raw).unwrap();

    assert_eq!(event.event_type, "url_verification");
    assert_eq!(event.challenge.as_deref(), Some("3eZbrw1a"));
}

#[test]
fn test_parse_event_callback_uses_inner_type() {
    let raw = gateway(&mention_body(json!([])));

    let event = parse_slack_event(&raw).unwrap();

    assert_eq!(event.event_type, "app_mention");
    assert!(event.challenge.is_none());
    assert_eq!(event.event_data["event"]["channel"], "C123");
}

#[test]
fn test_parse_event_callback_without_inner_type() {
    let raw = gateway(&json!({ "type": "event_callback", "event": {} }));
    assert_eq!(parse_slack_event(&raw).unwrap().event_type, "unknown");
}

#[test]
fn test_parse_unknown_envelope() {
    let raw = gateway(&json!({ "type": "block_actions" }));
    assert_eq!(parse_slack_event(&raw).unwrap().event_type, "unknown");
}

#[test]
fn test_parse_missing_body_is_unknown() {
    let event = parse_slack_event(&json!({ "headers": {} })).unwrap();
    assert_eq!(event.event_type, "unknown");
    assert_eq!(event.event_data, json!({}));
}

#[test]
fn test_parse_empty_body_rejected() {
    let err = parse_slack_event(&json!({ "body": "" })).unwrap_err();
    assert!(matches!(err, RelayError::InvalidEvent(ref m) if m == "Event body is empty"));
}

#[test]
fn test_parse_invalid_json_rejected() {
    let err = parse_slack_event(&json!({ "body": "{not json" })).unwrap_err();
    assert!(matches!(err, RelayError::InvalidEvent(ref m) if m.starts_with("Invalid JSON")));
}

#[test]
fn test_extract_message_text() {
    let data = mention_body(json!([
        { "type": "user", "user_id": "U0BOT" },
        { "type": "text", "text": "  what is the weather?  " }
    ]));

    let text = extract_message_text(&mention_event(data)).unwrap();

    assert_eq!(text, "what is the weather?");
}

#[test]
fn test_extract_rejects_non_mention() {
    let event = SlackEvent {
        event_type: "message".to_string(),
        event_data: json!({}),
        challenge: None,
    };

    let err = extract_message_text(&event).unwrap_err();

    assert_eq!(
        err.to_string(),
        "Failed to process Slack event: Cannot extract message from event type: message"
    );
}

#[test]
fn test_extract_shape_errors() {
    let cases = [
        (
            json!({ "event": { "type": "app_mention", "blocks": [] } }),
            "No blocks found in app mention event",
        ),
        (
            json!({ "event": { "type": "app_mention", "blocks": [ { "elements": [] } ] } }),
            "No elements found in first block",
        ),
        (
            mention_body(json!([ { "type": "user", "user_id": "U0BOT" } ])),
            "Insufficient elements to extract message text",
        ),
        (
            mention_body(json!([
                { "type": "user", "user_id": "U0BOT" },
                { "type": "text", "text": "   " }
            ])),
            "Message text is empty",
        ),
        (
            mention_body(json!([
                { "type": "user", "user_id": "U0BOT" },
                { "type": "emoji", "name": "wave" }
            ])),
            "Message text is empty",
        ),
        (
            json!({ "event": { "type": "app_mention", "blocks": "oops" } }),
            "No blocks found in app mention event",
        ),
    ];

    for (data, expected) in cases {
        match extract_message_text(&mention_event(data)) {
            Err(RelayError::EventError(msg)) => assert_eq!(msg, expected),
            other => panic!("expected EventError({expected}), got {other:?}"),
        }
    }
}
