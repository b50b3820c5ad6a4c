//! The scheduler engine.

use chrono::{Duration, NaiveDateTime};
use rayon::prelude::*;
use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use tracing::debug;

use crate::config::RulesConfig;
use crate::constraints::{
    CoverageStatus, HardConstraintValidator, SoftConstraintScorer, check_coverage,
};
use crate::error::SchedulingError;
use crate::models::{
    Alternative, ConstraintReport, CostBreakdown, Decision, Employee, Shift, ShiftType,
    SlotResolution, TimeSlot,
};

/// Shift length used when the caller does not give one.
pub const DEFAULT_SHIFT_DURATION_HOURS: Decimal = Decimal::from_parts(8, 0, 0, false, 0);

/// Number of runner-up candidates reported with a recommendation.
const MAX_ALTERNATIVES: usize = 3;

/// Resolves staffing gaps against an injected rules table.
///
/// The engine holds nothing but a reference to the rules, so every call is a
/// pure function of its arguments and one engine can serve many threads.
///
/// # Example
///
/// ```
/// use shift_engine::config::RulesConfig;
/// use shift_engine::engine::{DEFAULT_SHIFT_DURATION_HOURS, SchedulerEngine};
/// use shift_engine::models::{Employee, Role};
/// use chrono::NaiveDateTime;
/// use rust_decimal::Decimal;
///
/// let rules = RulesConfig::default();
/// let engine = SchedulerEngine::new(&rules);
///
/// let gap_start = NaiveDateTime::parse_from_str("2026-01-12 09:00:00", "%Y-%m-%d %H:%M:%S").unwrap();
/// let staff = vec![Employee::new("emp_001", Role::Pharmacist)];
///
/// let decision = engine.resolve_gap(Some(gap_start), &staff, DEFAULT_SHIFT_DURATION_HOURS);
/// assert!(decision.valid);
/// assert_eq!(decision.burden, Some(Decimal::new(8, 0)));
/// assert_eq!(decision.cost, Some(Decimal::new(64, 0)));
/// ```
#[derive(Debug, Clone, Copy)]
pub struct SchedulerEngine<'a> {
    rules: &'a RulesConfig,
}

impl<'a> SchedulerEngine<'a> {
    /// Creates an engine over the given rules table.
    pub fn new(rules: &'a RulesConfig) -> Self {
        Self { rules }
    }

    /// Recommends the lowest-burden legal employee for a gap.
    ///
    /// Every candidate is evaluated against a fresh draft shift starting at
    /// `gap_start` and lasting `shift_duration_hours`. Candidates failing a
    /// hard constraint are dropped; the rest are ranked by ascending burden,
    /// keeping input order on ties. The winner is returned together with up
    /// to three runner-ups.
    pub fn resolve_gap(
        &self,
        gap_start: Option<NaiveDateTime>,
        available: &[Employee],
        shift_duration_hours: Decimal,
    ) -> Decision {
        let Some(gap_start) = gap_start.filter(|_| !available.is_empty()) else {
            return Decision::failure(SchedulingError::MissingParameters);
        };

        let Some(gap_end) = gap_end(gap_start, shift_duration_hours) else {
            return Decision::failure(SchedulingError::InvalidDuration);
        };

        let validator = HardConstraintValidator::new(self.rules);
        let scorer = SoftConstraintScorer::new(self.rules);

        let ranked: Result<Vec<(&Employee, CostBreakdown)>, SchedulingError> = available
            .iter()
            .filter_map(|employee| {
                let shift = draft_shift(employee, gap_start, gap_end);
                let legal = validator.is_shift_legal(employee, &shift)
                    && validator.check_weekly_hours(employee, &shift);
                if !legal {
                    debug!(employee_id = %employee.id, %gap_start, "Candidate rejected");
                    return None;
                }
                Some(
                    scorer
                        .calculate_cost(employee, &shift)
                        .map(|breakdown| (employee, breakdown)),
                )
            })
            .collect();

        let mut ranked = match ranked {
            Ok(ranked) => ranked,
            Err(error) => return Decision::failure(error),
        };

        // sort_by is stable, so equal burdens keep input order
        ranked.sort_by(|(_, a), (_, b)| a.burden.cmp(&b.burden));

        let mut ranked = ranked.into_iter();
        let Some((winner, breakdown)) = ranked.next() else {
            debug!(%gap_start, candidates = available.len(), "No legal candidates");
            return Decision::failure(SchedulingError::NoLegalCandidates);
        };

        let alternatives = ranked
            .take(MAX_ALTERNATIVES)
            .map(|(employee, breakdown)| Alternative {
                employee: employee.clone(),
                cost: breakdown.cost,
                burden: breakdown.burden,
            })
            .collect();

        debug!(
            employee_id = %winner.id,
            burden = %breakdown.burden,
            %gap_start,
            "Gap resolved"
        );

        Decision::recommendation(winner.clone(), breakdown, alternatives)
    }

    /// Checks a manager's proposed assignment and prices it.
    pub fn validate_assignment(
        &self,
        employee: Option<&Employee>,
        shift: Option<&Shift>,
    ) -> Decision {
        let (Some(employee), Some(shift)) = (employee, shift) else {
            return Decision::failure(SchedulingError::MissingAssignmentData);
        };

        let validator = HardConstraintValidator::new(self.rules);

        if !validator.is_shift_legal(employee, shift) {
            return Decision::failure(SchedulingError::HardConstraintViolation);
        }

        if !validator.check_weekly_hours(employee, shift) {
            return Decision::failure(SchedulingError::WeeklyHoursExceeded);
        }

        match SoftConstraintScorer::new(self.rules).calculate_cost(employee, shift) {
            Ok(breakdown) => Decision::approval(breakdown),
            Err(error) => Decision::failure(error),
        }
    }

    /// Resolves every slot independently, in parallel.
    ///
    /// Results come back in slot order. No availability is consumed between
    /// slots, so one employee may be recommended for overlapping slots.
    pub fn find_best_assignments(
        &self,
        slots: &[TimeSlot],
        available: &[Employee],
        shift_duration_hours: Decimal,
    ) -> Vec<SlotResolution> {
        slots
            .par_iter()
            .map(|slot| SlotResolution {
                slot: slot.clone(),
                result: self.resolve_gap(Some(slot.time), available, shift_duration_hours),
            })
            .collect()
    }

    /// Runs the full hard-rule audit for a proposed assignment.
    pub fn audit_assignment(
        &self,
        employee: &Employee,
        shift: &Shift,
        force: bool,
    ) -> ConstraintReport {
        HardConstraintValidator::new(self.rules).audit(employee, shift, force)
    }

    /// Reports staffing coverage for each slot.
    pub fn coverage(&self, slots: &[TimeSlot]) -> Vec<CoverageStatus> {
        let minimum = &self.rules.hard.min_staff_per_slot;
        slots.iter().map(|slot| check_coverage(slot, minimum)).collect()
    }
}

/// Returns the gap end, or `None` if the duration is not a positive whole
/// number of minutes that fits the calendar.
fn gap_end(gap_start: NaiveDateTime, hours: Decimal) -> Option<NaiveDateTime> {
    let minutes = hours.checked_mul(Decimal::from(60))?.round().to_i64()?;
    if minutes <= 0 {
        return None;
    }
    gap_start.checked_add_signed(Duration::try_minutes(minutes)?)
}

fn draft_shift(employee: &Employee, start: NaiveDateTime, end: NaiveDateTime) -> Shift {
    Shift {
        id: format!("gap-{}-{}", employee.id, start.format("%Y%m%dT%H%M")),
        employee_id: Some(employee.id.clone()),
        start,
        end,
        shift_type: ShiftType::Standard,
    }
}
