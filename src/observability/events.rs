//! Observable events in neodb
//!
//! Events are explicit and typed. Begin/complete pairs around a unit of
//! work (`DATABASE_BUILD_*`, `QUERY_*`) come from `ObservationScope`.

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    /// Configuration loaded
    ConfigLoaded,

    /// NEO catalog parsed
    NeosLoaded,
    /// Close approach feed parsed
    ApproachesLoaded,

    /// One or more approaches had no NEO with a matching designation
    JoinMiss,
    /// A later NEO replaced an earlier one in the designation index
    DuplicateDesignation,
    /// A later NEO replaced an earlier one in the name index
    DuplicateName,

    /// A filter could not be evaluated
    QueryRejected,

    /// Results written to a file
    ResultsWritten,
}

impl Event {
    /// Returns the string representation of the event
    pub fn as_str(&self) -> &'static str {
        match self {
            Event::ConfigLoaded => "CONFIG_LOADED",
            Event::NeosLoaded => "NEOS_LOADED",
            Event::ApproachesLoaded => "APPROACHES_LOADED",
            Event::JoinMiss => "JOIN_MISS",
            Event::DuplicateDesignation => "DUPLICATE_DESIGNATION",
            Event::DuplicateName => "DUPLICATE_NAME",
            Event::QueryRejected => "QUERY_REJECTED",
            Event::ResultsWritten => "RESULTS_WRITTEN",
        }
    }

    /// Returns true if this event reports degraded input data
    pub fn is_degraded(&self) -> bool {
        matches!(
            self,
            Event::JoinMiss | Event::DuplicateDesignation | Event::DuplicateName
        )
    }

    /// Returns true if this event indicates a fatal condition
    pub fn is_fatal(&self) -> bool {
        matches!(self, Event::QueryRejected)
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
