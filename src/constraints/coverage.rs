//! Staffing coverage for a single time slot.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::config::MinStaffPerSlot;
use crate::models::{Role, TimeSlot};

/// A minimum staffing requirement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StaffRequirement {
    /// Minimum pharmacists on duty.
    Pharmacist,
    /// Minimum assistants on duty.
    Assistant,
    /// Minimum staff of any role, apprentices included.
    TotalActive,
}

/// A requirement the slot falls short of.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CoverageShortfall {
    /// The unmet requirement.
    pub requirement: StaffRequirement,
    /// How many staff the requirement asks for.
    pub required: u32,
    /// How many are assigned.
    pub actual: u32,
}

/// Coverage of one slot against the minimum staffing mix.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CoverageStatus {
    /// The slot being checked.
    pub slot_time: NaiveDateTime,
    /// Assigned pharmacists.
    pub pharmacists: u32,
    /// Assigned assistants.
    pub assistants: u32,
    /// All assigned staff.
    pub total: u32,
    /// True when no requirement falls short.
    pub covered: bool,
    /// Every unmet requirement.
    pub shortfalls: Vec<CoverageShortfall>,
}

/// Compares a slot's assigned staff with the minimum staffing mix.
///
/// # Example
///
/// ```
/// use shift_engine::config::MinStaffPerSlot;
/// use shift_engine::constraints::check_coverage;
/// use shift_engine::models::TimeSlot;
/// use chrono::NaiveDateTime;
///
/// let slot = TimeSlot::new(
///     NaiveDateTime::parse_from_str("2026-01-12 09:00:00", "%Y-%m-%d %H:%M:%S").unwrap(),
/// );
/// let status = check_coverage(&slot, &MinStaffPerSlot::default());
///
/// assert!(!status.covered);
/// assert_eq!(status.shortfalls.len(), 3);
/// ```
pub fn check_coverage(slot: &TimeSlot, minimum: &MinStaffPerSlot) -> CoverageStatus {
    let pharmacists = count(slot.count_role(Role::Pharmacist));
    let assistants = count(slot.count_role(Role::Assistant));
    let total = count(slot.assigned_staff.len());

    let shortfalls: Vec<CoverageShortfall> = [
        (StaffRequirement::Pharmacist, minimum.pharmacist, pharmacists),
        (StaffRequirement::Assistant, minimum.assistant, assistants),
        (StaffRequirement::TotalActive, minimum.total_active, total),
    ]
    .into_iter()
    .filter(|(_, required, actual)| actual < required)
    .map(|(requirement, required, actual)| CoverageShortfall {
        requirement,
        required,
        actual,
    })
    .collect();

    CoverageStatus {
        slot_time: slot.time,
        pharmacists,
        assistants,
        total,
        covered: shortfalls.is_empty(),
        shortfalls,
    }
}

fn count(n: usize) -> u32 {
    u32::try_from(n).unwrap_or(u32::MAX)
}
