//! Filter error types
//!
//! Error codes:
//! - NEO_UNSUPPORTED_CRITERION (FATAL)

use std::fmt;

/// Severity levels for filter errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// Programming error, never recovered
    Fatal,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Fatal => write!(f, "FATAL"),
        }
    }
}

/// Filter-specific error codes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterErrorCode {
    /// A filter has no key extraction for its attribute
    NeoUnsupportedCriterion,
}

impl FilterErrorCode {
    pub fn code(&self) -> &'static str {
        match self {
            FilterErrorCode::NeoUnsupportedCriterion => "NEO_UNSUPPORTED_CRITERION",
        }
    }

    /// All filter errors are FATAL
    pub fn severity(&self) -> Severity {
        Severity::Fatal
    }
}

impl fmt::Display for FilterErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// Filter error with context
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterError {
    code: FilterErrorCode,
    criterion: String,
    message: String,
}

impl FilterError {
    /// The named filter never overrode key extraction
    pub fn unsupported_criterion(criterion: impl Into<String>) -> Self {
        let criterion = criterion.into();
        Self {
            code: FilterErrorCode::NeoUnsupportedCriterion,
            message: format!("{} does not extract a comparison key", criterion),
            criterion,
        }
    }

    pub fn code(&self) -> FilterErrorCode {
        self.code
    }

    pub fn severity(&self) -> Severity {
        self.code.severity()
    }

    /// Name of the filter that failed
    pub fn criterion(&self) -> &str {
        &self.criterion
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn is_fatal(&self) -> bool {
        self.severity() == Severity::Fatal
    }
}

impl fmt::Display for FilterError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}] {}: {}",
            self.code.severity(),
            self.code.code(),
            self.message
        )
    }
}

impl std::error::Error for FilterError {}

/// Result type for filter evaluation
pub type FilterResult<T> = Result<T, FilterError>;
