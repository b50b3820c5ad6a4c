//! Error types for the shift gap resolution engine.
//!
//! Two families of errors live here:
//!
//! - [`EngineError`] covers data-quality and configuration problems that the
//!   caller must fix before the engine can run (bad YAML, a shift whose end is
//!   not after its start, an out-of-range preferred day).
//! - [`SchedulingError`] is the decision failure taxonomy. The engine never
//!   returns it through `Err`; it is folded into a
//!   [`Decision`](crate::models::Decision) so that every operation always
//!   produces a value.

use thiserror::Error;

/// The main error type for configuration loading and model construction.
///
/// # Example
///
/// ```
/// use shift_engine::error::EngineError;
///
/// let error = EngineError::ConfigNotFound {
///     path: "/missing/rules.yaml".to_string(),
/// };
/// assert_eq!(error.to_string(), "Configuration file not found: /missing/rules.yaml");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// A rules table value broke an invariant (e.g. a negative weight).
    #[error("Invalid rule '{rule}': {message}")]
    InvalidRules {
        /// The dotted name of the offending rule.
        rule: String,
        /// A description of what made the value invalid.
        message: String,
    },

    /// A shift was invalid or contained inconsistent data.
    #[error("Invalid shift '{shift_id}': {message}")]
    InvalidShift {
        /// The ID of the invalid shift.
        shift_id: String,
        /// A description of what made the shift invalid.
        message: String,
    },

    /// An employee record was invalid or contained inconsistent data.
    #[error("Invalid employee field '{field}': {message}")]
    InvalidEmployee {
        /// The field that was invalid.
        field: String,
        /// A description of what made the field invalid.
        message: String,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;

/// Why the engine declined to produce a recommendation or approve an assignment.
///
/// The `Display` text is the human-readable message callers already match on;
/// [`SchedulingError::code`] gives a stable machine-readable alternative.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SchedulingError {
    /// The gap start or the candidate pool was absent or empty.
    #[error("Missing required parameters")]
    MissingParameters,

    /// The requested shift duration was zero, negative or out of range.
    #[error("Shift duration must be a positive number of hours")]
    InvalidDuration,

    /// The gap start could not be read as an instant.
    #[error("Invalid gap start: {0}")]
    InvalidGapStart(String),

    /// Every candidate failed at least one hard constraint.
    #[error("No legal candidates available. Consider marketplace or floater.")]
    NoLegalCandidates,

    /// `validate_assignment` was called without an employee or a shift.
    #[error("Missing employee or shift data")]
    MissingAssignmentData,

    /// The proposed shift breaks the rest period or consecutive-day rule.
    #[error("Shift violates hard constraints (rest period or consecutive days)")]
    HardConstraintViolation,

    /// The proposed shift pushes the ISO week over the weekly hour cap.
    #[error("Shift would exceed maximum weekly hours")]
    WeeklyHoursExceeded,

    /// The burden or cost of a candidate does not fit in a decimal.
    #[error("Score out of range for employee '{employee_id}'")]
    ScoreOutOfRange {
        /// The employee whose score overflowed.
        employee_id: String,
    },
}

impl SchedulingError {
    /// Returns the stable code for this failure.
    pub fn code(&self) -> &'static str {
        match self {
            SchedulingError::MissingParameters => "MISSING_PARAMETERS",
            SchedulingError::InvalidDuration => "INVALID_DURATION",
            SchedulingError::InvalidGapStart(_) => "INVALID_GAP_START",
            SchedulingError::NoLegalCandidates => "NO_LEGAL_CANDIDATES",
            SchedulingError::MissingAssignmentData => "MISSING_ASSIGNMENT_DATA",
            SchedulingError::HardConstraintViolation => "HARD_CONSTRAINT_VIOLATION",
            SchedulingError::WeeklyHoursExceeded => "WEEKLY_HOURS_EXCEEDED",
            SchedulingError::ScoreOutOfRange { .. } => "SCORE_OUT_OF_RANGE",
        }
    }
}
