//! Event Sink Implementations
//!
//! Concrete implementations of PackageEventSink:
//! - JsonEventSink: NDJSON output for CI/automation
//! - ConsoleEventSink: Human-readable lines on stderr

mod console;
mod json;

pub use console::ConsoleEventSink;
pub use json::JsonEventSink;
