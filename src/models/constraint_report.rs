//! Detailed hard-constraint report.
//!
//! Where [`HardConstraintValidator::is_shift_legal`] answers yes or no, the
//! [`ConstraintReport`] lists every broken rule with the shifts involved,
//! the resulting weekly total and any contract warnings.
//!
//! [`HardConstraintValidator::is_shift_legal`]: crate::constraints::HardConstraintValidator::is_shift_legal

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Identifies which hard rule a violation comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ViolationCode {
    /// Less than the minimum daily rest between two shifts.
    DailyRestViolation,
    /// Too many consecutive working days.
    ConsecutiveDaysViolation,
    /// Weekly hours over the cap.
    WeeklyHoursViolation,
    /// Weekly hours over the employee's contract target.
    ContractHoursViolation,
    /// A single shift longer than the daily cap.
    #[serde(rename = "MAX_DAILY_HOURS")]
    MaxDailyHours,
}

/// How serious a violation is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Severity {
    /// Blocks the assignment.
    Error,
    /// Reported only (e.g. after a manager override).
    Warning,
}

/// A single broken hard rule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConstraintViolation {
    /// Which rule was broken.
    pub code: ViolationCode,
    /// Whether the violation blocks the assignment.
    pub severity: Severity,
    /// Human-readable description with the offending figures.
    pub message: String,
    /// Ids of the history shifts involved.
    #[serde(default)]
    pub affected_shifts: Vec<String>,
}

/// Every hard-rule finding for one employee and one proposed shift.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConstraintReport {
    /// True when no error-severity violation remains.
    pub valid: bool,
    /// All violations found.
    pub violations: Vec<ConstraintViolation>,
    /// Hours in the proposed shift's ISO week, proposed shift included.
    pub weekly_hours: Decimal,
    /// Non-blocking remarks (contract limits, overrides).
    pub warnings: Vec<String>,
}

impl ConstraintReport {
    /// Returns true if a violation with the given code was found.
    pub fn has_violation(&self, code: ViolationCode) -> bool {
        self.violations.iter().any(|v| v.code == code)
    }
}
