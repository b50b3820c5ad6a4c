//! Maximum daily hours detection.

use rust_decimal::Decimal;

use crate::models::{ConstraintViolation, Severity, Shift, ViolationCode};

/// Detects a single shift longer than `max_daily_hours`.
///
/// # Example
///
/// ```
/// use shift_engine::constraints::detect_daily_hours_violation;
/// use shift_engine::models::Shift;
/// use chrono::NaiveDateTime;
/// use rust_decimal::Decimal;
///
/// let parse = |s| NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S").unwrap();
/// let double = Shift::draft("new", parse("2026-01-12 06:00:00"), parse("2026-01-12 20:00:00")).unwrap();
///
/// let violation = detect_daily_hours_violation(&double, Decimal::new(12, 0)).unwrap();
/// assert_eq!(violation.message, "Shift duration (14h) exceeds maximum daily hours (12h)");
/// ```
pub fn detect_daily_hours_violation(
    shift: &Shift,
    max_daily_hours: Decimal,
) -> Option<ConstraintViolation> {
    let hours = shift.hours();
    if hours <= max_daily_hours {
        return None;
    }

    Some(ConstraintViolation {
        code: ViolationCode::MaxDailyHours,
        severity: Severity::Error,
        message: format!(
            "Shift duration ({}h) exceeds maximum daily hours ({}h)",
            hours.normalize(),
            max_daily_hours.normalize()
        ),
        affected_shifts: Vec::new(),
    })
}
