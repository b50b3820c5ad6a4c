//! Request types for the shift engine API.
//!
//! Bodies deserialize straight into the domain records. Each request then
//! runs [`validate`](ResolveGapRequest::validate) so that a malformed shift
//! or employee is rejected with a 400 before it reaches the engine.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::engine::DEFAULT_SHIFT_DURATION_HOURS;
use crate::error::EngineResult;
use crate::models::{Employee, Shift, TimeSlot};

/// Request body for `POST /resolve-gap`.
///
/// Every field is optional so that an incomplete request is answered with a
/// `valid: false` decision instead of a transport error.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ResolveGapRequest {
    /// Start of the gap, as an ISO-8601 or RFC 3339 timestamp.
    #[serde(default)]
    pub gap_start: Option<String>,
    /// The candidate pool.
    #[serde(default)]
    pub available_employees: Vec<Employee>,
    /// Length of the shift to fill; defaults to eight hours.
    #[serde(default)]
    pub shift_duration_hours: Option<Decimal>,
}

impl ResolveGapRequest {
    /// Validates every candidate.
    pub fn validate(&self) -> EngineResult<()> {
        validate_employees(&self.available_employees)
    }

    /// Returns the requested duration or the default.
    pub fn duration(&self) -> Decimal {
        self.shift_duration_hours
            .unwrap_or(DEFAULT_SHIFT_DURATION_HOURS)
    }
}

/// Request body for `POST /validate-assignment`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ValidateAssignmentRequest {
    /// The employee being assigned.
    #[serde(default)]
    pub employee: Option<Employee>,
    /// The proposed shift.
    #[serde(default)]
    pub shift: Option<Shift>,
}

impl ValidateAssignmentRequest {
    /// Validates whichever records are present.
    pub fn validate(&self) -> EngineResult<()> {
        if let Some(employee) = &self.employee {
            employee.validate()?;
        }
        if let Some(shift) = &self.shift {
            shift.validate()?;
        }
        Ok(())
    }
}

/// Request body for `POST /find-best-assignments`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FindBestAssignmentsRequest {
    /// Slots to resolve, in the order results should come back.
    pub time_slots: Vec<TimeSlot>,
    /// The candidate pool shared by every slot.
    pub available_employees: Vec<Employee>,
    /// Length of each shift; defaults to eight hours.
    #[serde(default)]
    pub shift_duration_hours: Option<Decimal>,
}

impl FindBestAssignmentsRequest {
    /// Validates every candidate.
    pub fn validate(&self) -> EngineResult<()> {
        validate_employees(&self.available_employees)
    }

    /// Returns the requested duration or the default.
    pub fn duration(&self) -> Decimal {
        self.shift_duration_hours
            .unwrap_or(DEFAULT_SHIFT_DURATION_HOURS)
    }
}

/// Request body for `POST /constraints/check`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConstraintCheckRequest {
    /// The employee being assigned.
    pub employee: Employee,
    /// The proposed shift.
    pub shift: Shift,
    /// Manager override: report violations as warnings.
    #[serde(default)]
    pub force: bool,
}

impl ConstraintCheckRequest {
    /// Validates the employee and the shift.
    pub fn validate(&self) -> EngineResult<()> {
        self.employee.validate()?;
        self.shift.validate()
    }
}

/// Request body for `POST /coverage`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CoverageRequest {
    /// Slots to check.
    pub time_slots: Vec<TimeSlot>,
}

fn validate_employees(employees: &[Employee]) -> EngineResult<()> {
    employees.iter().try_for_each(Employee::validate)
}
