//! Rules configuration types.
//!
//! This module contains the strongly-typed rules table deserialized from
//! YAML. Every type has a `Default` equal to the facility's standard rules,
//! so an engine can be built without touching the filesystem.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Deserialize;

use crate::error::{EngineError, EngineResult};

/// Minimum staffing mix for a single time slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct MinStaffPerSlot {
    /// Minimum number of pharmacists.
    pub pharmacist: u32,
    /// Minimum number of assistants.
    pub assistant: u32,
    /// Minimum number of staff of any role.
    pub total_active: u32,
}

impl Default for MinStaffPerSlot {
    fn default() -> Self {
        Self {
            pharmacist: 2,
            assistant: 1,
            total_active: 3,
        }
    }
}

fn default_max_daily_hours() -> Decimal {
    Decimal::new(12, 0)
}

/// Binary pass/fail limits.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct HardRules {
    /// Longest allowed run of calendar days with at least one shift.
    pub max_consecutive_days: u32,
    /// Minimum hours between the end of one shift and the start of the next.
    pub min_daily_rest_hours: Decimal,
    /// Maximum hours in one ISO week.
    pub max_weekly_hours: Decimal,
    /// Longest allowed single shift, in hours. Only the audit enforces it.
    #[serde(default = "default_max_daily_hours")]
    pub max_daily_hours: Decimal,
    /// Minimum staffing mix per slot.
    #[serde(default)]
    pub min_staff_per_slot: MinStaffPerSlot,
}

impl Default for HardRules {
    fn default() -> Self {
        Self {
            max_consecutive_days: 6,
            min_daily_rest_hours: Decimal::new(11, 0),
            max_weekly_hours: Decimal::new(50, 0),
            max_daily_hours: default_max_daily_hours(),
            min_staff_per_slot: MinStaffPerSlot::default(),
        }
    }
}

/// Per-hour multipliers by time category.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SoftWeights {
    /// Weekday daytime hours.
    pub standard: Decimal,
    /// Saturday hours.
    pub saturday: Decimal,
    /// Sunday hours.
    pub sunday: Decimal,
    /// Hours touching the night window.
    pub night: Decimal,
    /// Public holiday hours.
    pub holiday: Decimal,
}

impl Default for SoftWeights {
    fn default() -> Self {
        Self {
            standard: Decimal::ONE,
            saturday: Decimal::new(125, 2),
            sunday: Decimal::new(15, 1),
            night: Decimal::new(18, 1),
            holiday: Decimal::new(2, 0),
        }
    }
}

/// Flat additive penalties.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SoftPenalties {
    /// Working a day outside the employee's preferred days.
    pub pattern_deviation: Decimal,
    /// A second shift on a day the employee already works.
    pub split_shift: Decimal,
}

impl Default for SoftPenalties {
    fn default() -> Self {
        Self {
            pattern_deviation: Decimal::new(2, 0),
            split_shift: Decimal::new(5, 0),
        }
    }
}

fn default_balance_factor() -> Decimal {
    Decimal::new(5, 1)
}

/// Weighted preferences used to rank legal candidates.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SoftRules {
    /// Per-hour multipliers.
    pub weights: SoftWeights,
    /// Flat penalties.
    pub penalties: SoftPenalties,
    /// Multiplier applied to an employee's hour balance.
    #[serde(default = "default_balance_factor")]
    pub balance_factor: Decimal,
}

impl Default for SoftRules {
    fn default() -> Self {
        Self {
            weights: SoftWeights::default(),
            penalties: SoftPenalties::default(),
            balance_factor: default_balance_factor(),
        }
    }
}

fn default_region() -> String {
    "national".to_string()
}

/// A public holiday weighted with the `holiday` soft weight.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PublicHoliday {
    /// The date of the holiday.
    pub date: NaiveDate,
    /// The name of the holiday.
    pub name: String,
    /// The region where the holiday applies.
    #[serde(default = "default_region")]
    pub region: String,
}

/// Holidays configuration file structure.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct HolidaysConfig {
    /// The listed public holidays.
    #[serde(default)]
    pub public_holidays: Vec<PublicHoliday>,
}

/// The complete, read-only rules table.
///
/// Passed by reference into the validator, scorer and engine; never global.
///
/// # Example
///
/// ```
/// use shift_engine::config::RulesConfig;
/// use rust_decimal::Decimal;
///
/// let rules = RulesConfig::default();
/// assert_eq!(rules.hard.max_consecutive_days, 6);
/// assert_eq!(rules.soft.weights.sunday, Decimal::new(15, 1));
/// assert!(rules.validate().is_ok());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct RulesConfig {
    /// Hard limits.
    pub hard: HardRules,
    /// Soft weights and penalties.
    pub soft: SoftRules,
    /// Public holidays.
    #[serde(default)]
    pub public_holidays: Vec<PublicHoliday>,
}

impl RulesConfig {
    /// Checks that every numeric value is non-negative.
    pub fn validate(&self) -> EngineResult<()> {
        let weights = &self.soft.weights;
        let penalties = &self.soft.penalties;
        let values = [
            ("hard.min_daily_rest_hours", self.hard.min_daily_rest_hours),
            ("hard.max_weekly_hours", self.hard.max_weekly_hours),
            ("hard.max_daily_hours", self.hard.max_daily_hours),
            ("soft.weights.standard", weights.standard),
            ("soft.weights.saturday", weights.saturday),
            ("soft.weights.sunday", weights.sunday),
            ("soft.weights.night", weights.night),
            ("soft.weights.holiday", weights.holiday),
            ("soft.penalties.pattern_deviation", penalties.pattern_deviation),
            ("soft.penalties.split_shift", penalties.split_shift),
            ("soft.balance_factor", self.soft.balance_factor),
        ];

        match values.iter().find(|(_, value)| value.is_sign_negative() && !value.is_zero()) {
            Some((rule, value)) => Err(EngineError::InvalidRules {
                rule: (*rule).to_string(),
                message: format!("must not be negative (got {})", value),
            }),
            None => Ok(()),
        }
    }

    /// Returns true if the date is a configured public holiday.
    pub fn is_public_holiday(&self, date: NaiveDate) -> bool {
        self.public_holidays.iter().any(|h| h.date == date)
    }
}
