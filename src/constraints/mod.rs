//! Hard and soft constraint logic for the shift gap resolution engine.
//!
//! This module contains the hard rules deciding whether a candidate may take
//! a shift at all (daily rest, consecutive days, daily and weekly hours), the
//! soft scoring used to rank legal candidates, and the per-slot staffing
//! coverage check.

mod consecutive_days;
mod coverage;
mod daily_hours;
mod rest_period;
mod scorer;
mod time_weighting;
mod validator;
mod weekly_hours;

pub use consecutive_days::{consecutive_run_length, detect_consecutive_days_violation};
pub use coverage::{CoverageShortfall, CoverageStatus, StaffRequirement, check_coverage};
pub use daily_hours::detect_daily_hours_violation;
pub use rest_period::{detect_rest_violation, rest_gap_hours};
pub use scorer::SoftConstraintScorer;
pub use time_weighting::{
    DayType, NIGHT_WINDOW_END_HOUR, NIGHT_WINDOW_START_HOUR, get_day_type, hourly_weight,
    touches_night_window,
};
pub use validator::HardConstraintValidator;
pub use weekly_hours::{WeeklyHoursResult, evaluate_weekly_hours};
