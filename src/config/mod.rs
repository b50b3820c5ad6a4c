//! Rules configuration for the shift gap resolution engine.
//!
//! The rules table holds the hard limits (rest, consecutive days, weekly
//! hours, staffing mix) and the soft weights and penalties used for ranking.
//! It is loaded once and then passed by reference to every component.
//!
//! # Example
//!
//! ```no_run
//! use shift_engine::config::RulesLoader;
//!
//! let loader = RulesLoader::load("./config/default").unwrap();
//! println!("Min rest: {}h", loader.rules().hard.min_daily_rest_hours);
//! ```

mod loader;
mod types;

pub use loader::RulesLoader;
pub use types::{
    HardRules, HolidaysConfig, MinStaffPerSlot, PublicHoliday, RulesConfig, SoftPenalties,
    SoftRules, SoftWeights,
};
