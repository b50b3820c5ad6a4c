//! Decision models returned by the scheduler engine.
//!
//! Every engine operation answers with a [`Decision`] instead of an error:
//! failure is a value (`valid == false` plus a human-readable `error`), never
//! a panic.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::SchedulingError;

use super::{Employee, TimeSlot};

/// The soft-cost breakdown for one employee working one shift.
///
/// # Example
///
/// ```
/// use shift_engine::models::CostBreakdown;
/// use rust_decimal::Decimal;
///
/// let breakdown = CostBreakdown::new(Decimal::new(8, 0), Decimal::new(8, 0)).unwrap();
/// assert_eq!(breakdown.cost, Decimal::new(64, 0));
///
/// assert!(CostBreakdown::new(Decimal::MAX, Decimal::new(8, 0)).is_none());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CostBreakdown {
    /// The soft score (lower is better).
    pub burden: Decimal,
    /// The shift duration in hours.
    pub hours: Decimal,
    /// `burden * hours`.
    pub cost: Decimal,
}

impl CostBreakdown {
    /// Builds a breakdown, deriving `cost` from burden and hours.
    ///
    /// Returns `None` if the cost does not fit in a `Decimal`.
    pub fn new(burden: Decimal, hours: Decimal) -> Option<Self> {
        Some(Self {
            burden,
            hours,
            cost: burden.checked_mul(hours)?,
        })
    }
}

/// A runner-up candidate for a gap.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Alternative {
    /// The runner-up employee.
    pub employee: Employee,
    /// The runner-up's cost.
    pub cost: Decimal,
    /// The runner-up's burden.
    pub burden: Decimal,
}

/// The outcome of resolving a gap or validating an assignment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Decision {
    /// Whether the engine produced a usable answer.
    pub valid: bool,
    /// Human-readable failure reason.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    /// Stable failure code.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error_code: Option<String>,
    /// The recommended employee (gap resolution only).
    #[serde(default)]
    pub employee: Option<Employee>,
    /// Cost of the recommendation or assignment.
    #[serde(default)]
    pub cost: Option<Decimal>,
    /// Burden of the recommendation or assignment.
    #[serde(default)]
    pub burden: Option<Decimal>,
    /// Duration of the evaluated shift in hours.
    #[serde(default)]
    pub hours: Option<Decimal>,
    /// Up to three runner-up candidates, best first.
    #[serde(default)]
    pub alternatives: Vec<Alternative>,
}

impl Decision {
    /// Builds a failed decision.
    ///
    /// # Example
    ///
    /// ```
    /// use shift_engine::error::SchedulingError;
    /// use shift_engine::models::Decision;
    ///
    /// let decision = Decision::failure(SchedulingError::MissingParameters);
    /// assert!(!decision.valid);
    /// assert_eq!(decision.error.as_deref(), Some("Missing required parameters"));
    /// ```
    pub fn failure(error: SchedulingError) -> Self {
        Self {
            valid: false,
            error: Some(error.to_string()),
            error_code: Some(error.code().to_string()),
            employee: None,
            cost: None,
            burden: None,
            hours: None,
            alternatives: Vec::new(),
        }
    }

    /// Builds a gap recommendation.
    pub fn recommendation(
        employee: Employee,
        breakdown: CostBreakdown,
        alternatives: Vec<Alternative>,
    ) -> Self {
        Self {
            employee: Some(employee),
            alternatives,
            ..Self::approval(breakdown)
        }
    }

    /// Builds an approval of a proposed assignment.
    pub fn approval(breakdown: CostBreakdown) -> Self {
        Self {
            valid: true,
            error: None,
            error_code: None,
            employee: None,
            cost: Some(breakdown.cost),
            burden: Some(breakdown.burden),
            hours: Some(breakdown.hours),
            alternatives: Vec::new(),
        }
    }
}

/// The decision for one slot of a batch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SlotResolution {
    /// The slot that was resolved.
    pub slot: TimeSlot,
    /// The decision for that slot.
    pub result: Decision,
}
