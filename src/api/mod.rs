//! Lambda handlers and request processing

pub mod handler;
pub mod hello;
pub mod parsing;
pub mod signature;

// Re-export the main handler for convenience
pub use handler::{handle_with, handler, route_event};
