//! Slack-facing stages: inbound event decoding and outbound webhook delivery.

pub mod event_parser;
pub mod webhook;

pub use event_parser::SlackEventParser;
pub use webhook::SlackWebhookSender;
