//! Time slot model.
//!
//! A [`TimeSlot`] is a point in time that needs staffing. It is the batch
//! input to [`SchedulerEngine::find_best_assignments`] and the unit the
//! coverage check works on.
//!
//! [`SchedulerEngine::find_best_assignments`]: crate::engine::SchedulerEngine::find_best_assignments

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use super::Role;

/// A staff member already assigned to a slot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssignedStaff {
    /// The assigned employee.
    pub employee_id: String,
    /// The role the employee covers in this slot.
    pub role: Role,
}

/// A point in time requiring staffing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeSlot {
    /// The instant that needs covering.
    pub time: NaiveDateTime,
    /// Staff already assigned to the slot.
    #[serde(default)]
    pub assigned_staff: Vec<AssignedStaff>,
}

impl TimeSlot {
    /// Creates an unstaffed slot.
    pub fn new(time: NaiveDateTime) -> Self {
        Self {
            time,
            assigned_staff: Vec::new(),
        }
    }

    /// Counts assigned staff covering the given role.
    pub fn count_role(&self, role: Role) -> usize {
        self.assigned_staff.iter().filter(|s| s.role == role).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_slot_defaults_to_unstaffed() {
        let json = r#"{ "time": "2026-01-12T09:00:00" }"#;
        let slot: TimeSlot = serde_json::from_str(json).unwrap();
        assert!(slot.assigned_staff.is_empty());
    }

    #[test]
    fn test_count_role() {
        let mut slot = TimeSlot::new(
            NaiveDateTime::parse_from_str("2026-01-12 09:00:00", "%Y-%m-%d %H:%M:%S").unwrap(),
        );
        slot.assigned_staff.push(AssignedStaff {
            employee_id: "emp_001".to_string(),
            role: Role::Pharmacist,
        });
        slot.assigned_staff.push(AssignedStaff {
            employee_id: "emp_002".to_string(),
            role: Role::Apprentice,
        });

        assert_eq!(slot.count_role(Role::Pharmacist), 1);
        assert_eq!(slot.count_role(Role::Assistant), 0);
        assert_eq!(slot.count_role(Role::Apprentice), 1);
    }
}
