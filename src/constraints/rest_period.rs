//! Minimum daily rest detection.
//!
//! Every pair formed by the proposed shift and a history shift must leave at
//! least `min_daily_rest_hours` between the end of the earlier one and the
//! start of the later one. Overlapping shifts leave no rest at all.

use chrono::Duration;
use rust_decimal::Decimal;

use crate::models::{ConstraintViolation, Employee, Severity, Shift, ViolationCode};

/// Returns the rest in hours between two shifts, or zero if they overlap.
///
/// # Example
///
/// ```
/// use shift_engine::constraints::rest_gap_hours;
/// use shift_engine::models::Shift;
/// use chrono::NaiveDateTime;
/// use rust_decimal::Decimal;
///
/// let parse = |s| NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S").unwrap();
/// let late = Shift::draft("a", parse("2026-01-12 14:00:00"), parse("2026-01-12 22:00:00")).unwrap();
/// let early = Shift::draft("b", parse("2026-01-13 06:00:00"), parse("2026-01-13 14:00:00")).unwrap();
///
/// assert_eq!(rest_gap_hours(&late, &early), Decimal::new(8, 0));
/// assert_eq!(rest_gap_hours(&early, &late), Decimal::new(8, 0));
/// ```
pub fn rest_gap_hours(a: &Shift, b: &Shift) -> Decimal {
    let gap = if a.overlaps(b) {
        Duration::zero()
    } else if a.end <= b.start {
        b.start - a.end
    } else {
        a.start - b.end
    };

    Decimal::new(gap.num_minutes(), 0) / Decimal::new(60, 0)
}

/// Detects history shifts that leave too little rest around the proposed shift.
///
/// Returns `None` when every history shift leaves at least
/// `min_rest_hours`. Otherwise the violation lists every offending shift and
/// reports the shortest rest found. An empty history never violates.
pub fn detect_rest_violation(
    employee: &Employee,
    shift: &Shift,
    min_rest_hours: Decimal,
) -> Option<ConstraintViolation> {
    let offenders: Vec<(&Shift, Decimal)> = employee
        .history_excluding(shift)
        .map(|existing| (existing, rest_gap_hours(existing, shift)))
        .filter(|(_, rest)| *rest < min_rest_hours)
        .collect();

    let shortest = offenders.iter().map(|(_, rest)| *rest).min()?;

    Some(ConstraintViolation {
        code: ViolationCode::DailyRestViolation,
        severity: Severity::Error,
        message: format!(
            "Insufficient rest between shifts ({}h < {}h required)",
            shortest.normalize(),
            min_rest_hours.normalize()
        ),
        affected_shifts: offenders.iter().map(|(s, _)| s.id.clone()).collect(),
    })
}
