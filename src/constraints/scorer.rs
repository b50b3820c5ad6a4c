//! Soft constraint scoring.
//!
//! The burden of a candidate/shift pair is the weighted hours of the shift
//! plus flat penalties for working outside preferred days or twice on the
//! same date, plus a share of the employee's running hour balance. Lower is
//! better. Cost scales burden by the shift's hours.

use rust_decimal::Decimal;
use tracing::debug;

use crate::config::{RulesConfig, SoftRules};
use crate::error::SchedulingError;
use crate::models::{CostBreakdown, Employee, Shift};

use super::time_weighting::hourly_weight;

/// Ranks legal candidates by how costly a shift would be for them.
#[derive(Debug, Clone, Copy)]
pub struct SoftConstraintScorer<'a> {
    rules: &'a RulesConfig,
}

impl<'a> SoftConstraintScorer<'a> {
    /// Creates a scorer over the given rules table.
    pub fn new(rules: &'a RulesConfig) -> Self {
        Self { rules }
    }

    fn soft(&self) -> &SoftRules {
        &self.rules.soft
    }

    /// Computes the burden of assigning `shift` to `employee`.
    ///
    /// Fails with [`SchedulingError::ScoreOutOfRange`] when the score does
    /// not fit in a `Decimal`, which a huge hour balance can cause.
    ///
    /// # Example
    ///
    /// ```
    /// use shift_engine::config::RulesConfig;
    /// use shift_engine::constraints::SoftConstraintScorer;
    /// use shift_engine::models::{Employee, Role, Shift};
    /// use chrono::NaiveDateTime;
    /// use rust_decimal::Decimal;
    ///
    /// let rules = RulesConfig::default();
    /// let scorer = SoftConstraintScorer::new(&rules);
    ///
    /// let parse = |s| NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S").unwrap();
    /// let employee = Employee::new("emp_001", Role::Pharmacist);
    /// // Monday 09:00 - 17:00
    /// let shift = Shift::draft("new", parse("2026-01-12 09:00:00"), parse("2026-01-12 17:00:00")).unwrap();
    ///
    /// assert_eq!(scorer.calculate_burden(&employee, &shift), Ok(Decimal::new(8, 0)));
    /// ```
    pub fn calculate_burden(
        &self,
        employee: &Employee,
        shift: &Shift,
    ) -> Result<Decimal, SchedulingError> {
        let soft = self.soft();
        let hours = shift.hours();
        let weight = hourly_weight(shift, self.rules);

        let out_of_range = || SchedulingError::ScoreOutOfRange {
            employee_id: employee.id.clone(),
        };

        let mut score = hours.checked_mul(weight).ok_or_else(out_of_range)?;

        if !employee.preferred_days.is_empty()
            && !employee.prefers_weekday(shift.weekday_index())
        {
            score = score
                .checked_add(soft.penalties.pattern_deviation)
                .ok_or_else(out_of_range)?;
        }

        // Applied once no matter how many same-day shifts exist
        let date = shift.date();
        if employee.history_excluding(shift).any(|s| s.date() == date) {
            score = score
                .checked_add(soft.penalties.split_shift)
                .ok_or_else(out_of_range)?;
        }

        score = employee
            .current_balance
            .checked_mul(soft.balance_factor)
            .and_then(|balance| score.checked_add(balance))
            .ok_or_else(out_of_range)?;

        debug!(
            employee_id = %employee.id,
            shift_id = %shift.id,
            %hours,
            %weight,
            burden = %score,
            "Calculated burden"
        );

        Ok(score)
    }

    /// Computes the burden, or `None` when either side is missing.
    ///
    /// `None` stands for an unbounded burden: a missing candidate, or one
    /// whose score overflows, can never outrank a present one.
    pub fn calculate_burden_checked(
        &self,
        employee: Option<&Employee>,
        shift: Option<&Shift>,
    ) -> Option<Decimal> {
        match (employee, shift) {
            (Some(employee), Some(shift)) => self.calculate_burden(employee, shift).ok(),
            _ => None,
        }
    }

    /// Computes burden, hours and cost (`burden * hours`) for a pair.
    pub fn calculate_cost(
        &self,
        employee: &Employee,
        shift: &Shift,
    ) -> Result<CostBreakdown, SchedulingError> {
        let burden = self.calculate_burden(employee, shift)?;
        CostBreakdown::new(burden, shift.hours()).ok_or_else(|| {
            SchedulingError::ScoreOutOfRange {
                employee_id: employee.id.clone(),
            }
        })
    }
}
