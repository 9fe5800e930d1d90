//! Observability for neodb
//!
//! - Structured logging (one JSON object per line on stderr)
//! - Typed events
//! - Begin/complete scopes around database builds and queries
//!
//! Observability never changes query results.

mod events;
mod logger;
mod scope;

pub use events::Event;
pub use logger::{Logger, Severity};
pub use scope::ObservationScope;

fn severity_for(event: Event) -> Severity {
    if event.is_fatal() {
        Severity::Fatal
    } else if event.is_degraded() {
        Severity::Warn
    } else {
        Severity::Info
    }
}

/// Log an event at its natural severity
pub fn log_event(event: Event) {
    Logger::log(severity_for(event), event.as_str(), &[]);
}

/// Log an event at its natural severity, with fields
pub fn log_event_with_fields(event: Event, fields: &[(&str, &str)]) {
    Logger::log(severity_for(event), event.as_str(), fields);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_severity() {
        assert_eq!(severity_for(Event::JoinMiss), Severity::Warn);
        assert_eq!(severity_for(Event::QueryRejected), Severity::Fatal);
        assert_eq!(severity_for(Event::NeosLoaded), Severity::Info);
    }

    #[test]
    fn test_log_event_with_fields() {
        log_event(Event::ConfigLoaded);
        log_event_with_fields(Event::NeosLoaded, &[("count", "2")]);
    }
}
