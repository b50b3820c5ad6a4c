//! Day-type detection and per-hour weighting.
//!
//! This module classifies a shift by the day it starts on (weekday, Saturday,
//! Sunday, public holiday) and by whether it touches the night window, and
//! turns that classification into the per-hour multiplier used by the soft
//! scorer.

use chrono::{Datelike, NaiveDateTime, Timelike, Weekday};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::config::RulesConfig;
use crate::models::Shift;

/// A shift starting at or after this hour touches the night window.
pub const NIGHT_WINDOW_START_HOUR: u32 = 19;

/// A shift starting before, or ending at or before, this hour touches the night window.
pub const NIGHT_WINDOW_END_HOUR: u32 = 6;

/// The type of day a shift starts on.
///
/// # Example
///
/// ```
/// use shift_engine::constraints::DayType;
///
/// let day_type = DayType::Saturday;
/// assert_eq!(day_type.to_string(), "Saturday");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DayType {
    /// Monday through Friday.
    Weekday,
    /// Saturday.
    Saturday,
    /// Sunday.
    Sunday,
}

impl std::fmt::Display for DayType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DayType::Weekday => write!(f, "Weekday"),
            DayType::Saturday => write!(f, "Saturday"),
            DayType::Sunday => write!(f, "Sunday"),
        }
    }
}

/// Determines the day type for a given datetime.
///
/// # Example
///
/// ```
/// use shift_engine::constraints::{get_day_type, DayType};
/// use chrono::NaiveDateTime;
///
/// // 2026-01-17 is a Saturday
/// let saturday = NaiveDateTime::parse_from_str("2026-01-17 15:00:00", "%Y-%m-%d %H:%M:%S").unwrap();
/// assert_eq!(get_day_type(saturday), DayType::Saturday);
///
/// // 2026-01-12 is a Monday
/// let monday = NaiveDateTime::parse_from_str("2026-01-12 09:00:00", "%Y-%m-%d %H:%M:%S").unwrap();
/// assert_eq!(get_day_type(monday), DayType::Weekday);
/// ```
pub fn get_day_type(datetime: NaiveDateTime) -> DayType {
    match datetime.weekday() {
        Weekday::Sat => DayType::Saturday,
        Weekday::Sun => DayType::Sunday,
        _ => DayType::Weekday,
    }
}

/// Returns true if the shift touches the night window.
///
/// The shift counts as night work when it starts at or after 19:00, starts
/// before 06:00, or ends at or before 06:00.
pub fn touches_night_window(shift: &Shift) -> bool {
    let start_hour = shift.start.hour();
    let end_hour = shift.end.hour();

    start_hour >= NIGHT_WINDOW_START_HOUR
        || start_hour < NIGHT_WINDOW_END_HOUR
        || end_hour <= NIGHT_WINDOW_END_HOUR
}

/// Returns the per-hour multiplier for a shift.
///
/// The weekday weight comes first (Sunday over Saturday over standard). A
/// public holiday or the night window can raise the weight but never lower it.
///
/// # Example
///
/// ```
/// use shift_engine::config::RulesConfig;
/// use shift_engine::constraints::hourly_weight;
/// use shift_engine::models::Shift;
/// use chrono::NaiveDateTime;
/// use rust_decimal::Decimal;
///
/// let rules = RulesConfig::default();
/// // Sunday 08:00 - 16:00
/// let shift = Shift::draft(
///     "shift_001",
///     NaiveDateTime::parse_from_str("2026-01-18 08:00:00", "%Y-%m-%d %H:%M:%S").unwrap(),
///     NaiveDateTime::parse_from_str("2026-01-18 16:00:00", "%Y-%m-%d %H:%M:%S").unwrap(),
/// ).unwrap();
/// assert_eq!(hourly_weight(&shift, &rules), Decimal::new(15, 1));
/// ```
pub fn hourly_weight(shift: &Shift, rules: &RulesConfig) -> Decimal {
    let weights = &rules.soft.weights;

    let mut weight = match get_day_type(shift.start) {
        DayType::Weekday => weights.standard,
        DayType::Saturday => weights.saturday,
        DayType::Sunday => weights.sunday,
    };

    if rules.is_public_holiday(shift.date()) {
        weight = weight.max(weights.holiday);
    }

    if touches_night_window(shift) {
        weight = weight.max(weights.night);
    }

    weight
}
