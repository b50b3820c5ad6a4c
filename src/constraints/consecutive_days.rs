//! Consecutive working day detection.

use std::collections::BTreeSet;

use chrono::NaiveDate;

use crate::models::{ConstraintViolation, Employee, Severity, Shift, ViolationCode};

/// Returns the length of the run of consecutive working days containing the
/// proposed shift's date, counting the proposed shift itself.
///
/// A day counts as worked when at least one shift starts on it.
pub fn consecutive_run_length(employee: &Employee, shift: &Shift) -> u32 {
    let (first, last) = run_span(employee, shift);
    // both bounds come from the same finite set, so the span fits easily
    ((last - first).num_days() + 1) as u32
}

/// Detects a run of consecutive working days longer than `max_days`.
///
/// # Example
///
/// ```
/// use shift_engine::constraints::detect_consecutive_days_violation;
/// use shift_engine::models::{Employee, Role, Shift};
/// use chrono::NaiveDateTime;
///
/// let parse = |s| NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S").unwrap();
/// let employee = Employee::new("emp_001", Role::Assistant);
/// let shift = Shift::draft("new", parse("2026-01-12 09:00:00"), parse("2026-01-12 17:00:00")).unwrap();
///
/// assert!(detect_consecutive_days_violation(&employee, &shift, 6).is_none());
/// ```
pub fn detect_consecutive_days_violation(
    employee: &Employee,
    shift: &Shift,
    max_days: u32,
) -> Option<ConstraintViolation> {
    let run = consecutive_run_length(employee, shift);
    if run <= max_days {
        return None;
    }

    let (first, last) = run_span(employee, shift);

    let affected_shifts = employee
        .history_excluding(shift)
        .filter(|s| (first..=last).contains(&s.date()))
        .map(|s| s.id.clone())
        .collect();

    Some(ConstraintViolation {
        code: ViolationCode::ConsecutiveDaysViolation,
        severity: Severity::Error,
        message: format!(
            "Would result in {} consecutive days (max {} allowed)",
            run, max_days
        ),
        affected_shifts,
    })
}

/// Returns the first and last date of the worked run around the shift's date.
///
/// Walks outwards from the proposed date while the neighbouring days are worked.
fn run_span(employee: &Employee, shift: &Shift) -> (NaiveDate, NaiveDate) {
    let worked: BTreeSet<NaiveDate> = employee.history_excluding(shift).map(Shift::date).collect();
    let day = shift.date();

    let mut first = day;
    while let Some(previous) = first.pred_opt().filter(|d| worked.contains(d)) {
        first = previous;
    }

    let mut last = day;
    while let Some(next) = last.succ_opt().filter(|d| worked.contains(d)) {
        last = next;
    }

    (first, last)
}
