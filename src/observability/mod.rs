//! Observability subsystem
//!
//! Provides:
//! - Structured logging (JSON lines on stderr)
//! - Typed lifecycle and request events
//! - Request counters
//!
//! # Usage
//!
//! ```ignore
//! use gradebook::observability::{log_event_with_fields, Event};
//!
//! log_event_with_fields(Event::MutationApplied, &[("operation", "addCourse")]);
//! ```

mod events;
mod logger;
mod metrics;

pub use events::Event;
pub use logger::{Logger, Severity};
pub use metrics::{MetricsRegistry, MetricsSnapshot};

/// Log an event at its default severity
pub fn log_event(event: Event) {
    Logger::log(event.severity(), event.as_str(), &[]);
}

/// Log an event with fields at its default severity
pub fn log_event_with_fields(event: Event, fields: &[(&str, &str)]) {
    Logger::log(event.severity(), event.as_str(), fields);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_event() {
        // This just verifies no panic
        log_event(Event::BootStart);
        log_event_with_fields(Event::ConfigLoaded, &[("data_dir", "/tmp/test")]);
    }
}
