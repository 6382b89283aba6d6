//! Configuration, plain records and the stage traits.

pub mod config;
pub mod models;
pub mod services;

pub use config::AppConfig;
pub use services::{EventParser, LlmService, MessageSender};
