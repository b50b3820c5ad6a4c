//! Employee model and related types.
//!
//! This module defines the [`Employee`] struct and [`Role`] enum for
//! representing workers eligible for gap assignment.

use std::collections::BTreeSet;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

use super::Shift;

/// The highest valid weekday index (Saturday, counting Sunday as 0).
pub const MAX_WEEKDAY_INDEX: u8 = 6;

/// The professional role an employee is rostered under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Role {
    /// A licensed pharmacist.
    Pharmacist,
    /// A pharmacy assistant.
    Assistant,
    /// An apprentice; counts towards total staffing only.
    Apprentice,
}

/// Represents a worker eligible for assignment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Employee {
    /// Unique identifier for the employee.
    pub id: String,
    /// The role the employee works under.
    pub role: Role,
    /// Contractual hours per period.
    #[serde(default)]
    pub contract_target_hours: Decimal,
    /// Accumulated overtime (positive) or under-time (negative).
    #[serde(default)]
    pub current_balance: Decimal,
    /// Preferred weekdays, 0 (Sunday) through 6 (Saturday). Empty means no preference.
    #[serde(default)]
    pub preferred_days: BTreeSet<u8>,
    /// Previously assigned shifts.
    #[serde(default)]
    pub shift_history: Vec<Shift>,
}

impl Employee {
    /// Creates an employee with no history, no preferences and a zero balance.
    ///
    /// # Examples
    ///
    /// ```
    /// use shift_engine::models::{Employee, Role};
    ///
    /// let employee = Employee::new("emp_001", Role::Pharmacist);
    /// assert!(employee.shift_history.is_empty());
    /// assert!(employee.prefers_weekday(0));
    /// ```
    pub fn new(id: impl Into<String>, role: Role) -> Self {
        Self {
            id: id.into(),
            role,
            contract_target_hours: Decimal::ZERO,
            current_balance: Decimal::ZERO,
            preferred_days: BTreeSet::new(),
            shift_history: Vec::new(),
        }
    }

    /// Checks the record before it reaches the engine.
    ///
    /// Rejects an empty id, preferred days outside 0..=6 and history shifts
    /// whose end is not after their start.
    pub fn validate(&self) -> EngineResult<()> {
        if self.id.trim().is_empty() {
            return Err(EngineError::InvalidEmployee {
                field: "id".to_string(),
                message: "must not be empty".to_string(),
            });
        }

        if let Some(day) = self.preferred_days.iter().find(|d| **d > MAX_WEEKDAY_INDEX) {
            return Err(EngineError::InvalidEmployee {
                field: "preferred_days".to_string(),
                message: format!("weekday {} is out of range (0 = Sunday .. 6 = Saturday)", day),
            });
        }

        self.shift_history.iter().try_for_each(Shift::validate)
    }

    /// Returns true if the employee is happy to work on the given weekday.
    ///
    /// An employee without stated preferences is happy to work any day.
    pub fn prefers_weekday(&self, weekday_index: u8) -> bool {
        self.preferred_days.is_empty() || self.preferred_days.contains(&weekday_index)
    }

    /// Returns the history shifts relevant to evaluating `proposed`.
    ///
    /// A history entry with the same id as the proposed shift is the shift
    /// being moved, so it is left out.
    pub fn history_excluding<'a>(&'a self, proposed: &'a Shift) -> impl Iterator<Item = &'a Shift> {
        self.shift_history
            .iter()
            .filter(move |s| proposed.id.is_empty() || s.id != proposed.id)
    }
}
