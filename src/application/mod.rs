//! Application layer: the use cases that drive the pipeline stages.

pub mod use_cases;

pub use use_cases::{HelloWorldUseCase, SlackEventUseCase};
