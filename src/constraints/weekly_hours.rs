//! Weekly hour cap.
//!
//! Hours are totalled over the ISO week (Monday to Sunday) containing the
//! proposed shift's start. A history shift belongs to the week it starts in.

use chrono::Datelike;
use rust_decimal::Decimal;

use crate::models::{ConstraintViolation, Employee, Severity, Shift, ViolationCode};

/// The outcome of totalling an ISO week.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WeeklyHoursResult {
    /// Existing hours in the week plus the proposed shift.
    pub weekly_hours: Decimal,
    /// Present when the total exceeds the cap.
    pub violation: Option<ConstraintViolation>,
}

/// Totals the proposed shift's ISO week and compares it with `max_weekly_hours`.
///
/// # Example
///
/// ```
/// use shift_engine::constraints::evaluate_weekly_hours;
/// use shift_engine::models::{Employee, Role, Shift};
/// use chrono::NaiveDateTime;
/// use rust_decimal::Decimal;
///
/// let parse = |s| NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S").unwrap();
/// let employee = Employee::new("emp_001", Role::Pharmacist);
/// let shift = Shift::draft("new", parse("2026-01-12 09:00:00"), parse("2026-01-12 17:00:00")).unwrap();
///
/// let result = evaluate_weekly_hours(&employee, &shift, Decimal::new(50, 0));
/// assert_eq!(result.weekly_hours, Decimal::new(8, 0));
/// assert!(result.violation.is_none());
/// ```
pub fn evaluate_weekly_hours(
    employee: &Employee,
    shift: &Shift,
    max_weekly_hours: Decimal,
) -> WeeklyHoursResult {
    let week = shift.start.iso_week();

    let week_shifts: Vec<&Shift> = employee
        .history_excluding(shift)
        .filter(|s| s.start.iso_week() == week)
        .collect();

    let existing: Decimal = week_shifts.iter().map(|s| s.hours()).sum();
    let weekly_hours = existing + shift.hours();

    let violation = (weekly_hours > max_weekly_hours).then(|| ConstraintViolation {
        code: ViolationCode::WeeklyHoursViolation,
        severity: Severity::Error,
        message: format!(
            "Total weekly hours ({}h) exceeds maximum ({}h)",
            weekly_hours.normalize(),
            max_weekly_hours.normalize()
        ),
        affected_shifts: week_shifts.iter().map(|s| s.id.clone()).collect(),
    });

    WeeklyHoursResult {
        weekly_hours,
        violation,
    }
}
