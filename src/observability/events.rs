//! Observable events
//!
//! Every log line the service emits names one of these events.

use std::fmt;

use super::logger::Severity;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    // Lifecycle
    /// Startup begins
    BootStart,
    /// Configuration resolved
    ConfigLoaded,
    /// Seed files loaded into the store
    DatasetLoaded,
    /// Seed data holds a reference that does not resolve
    IntegrityViolation,
    /// HTTP server listening
    Serving,
    /// HTTP server stopped
    ShutdownComplete,

    // Requests
    /// Mutation validated and applied
    MutationApplied,
    /// Mutation rejected by the validator
    MutationRejected,
}

impl Event {
    /// Returns the string representation of the event
    pub fn as_str(&self) -> &'static str {
        match self {
            Event::BootStart => "BOOT_START",
            Event::ConfigLoaded => "CONFIG_LOADED",
            Event::DatasetLoaded => "DATASET_LOADED",
            Event::IntegrityViolation => "INTEGRITY_VIOLATION",
            Event::Serving => "SERVING",
            Event::ShutdownComplete => "SHUTDOWN_COMPLETE",
            Event::MutationApplied => "MUTATION_APPLIED",
            Event::MutationRejected => "MUTATION_REJECTED",
        }
    }

    /// Severity the event is logged at
    pub fn severity(&self) -> Severity {
        match self {
            Event::IntegrityViolation | Event::MutationRejected => Severity::Warn,
            _ => Severity::Info,
        }
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_names() {
        assert_eq!(Event::DatasetLoaded.as_str(), "DATASET_LOADED");
        assert_eq!(Event::MutationRejected.to_string(), "MUTATION_REJECTED");
    }

    #[test]
    fn test_rejections_are_warnings() {
        assert_eq!(Event::MutationRejected.severity(), Severity::Warn);
        assert_eq!(Event::MutationApplied.severity(), Severity::Info);
    }
}
