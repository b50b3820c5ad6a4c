//! Core data models for the shift gap resolution engine.
//!
//! This module contains the value records the engine consumes (employees,
//! shifts, time slots) and the records it produces (decisions, cost
//! breakdowns, constraint reports).

mod constraint_report;
mod decision;
mod employee;
mod shift;
mod time_slot;

pub use constraint_report::{ConstraintReport, ConstraintViolation, Severity, ViolationCode};
pub use decision::{Alternative, CostBreakdown, Decision, SlotResolution};
pub use employee::{Employee, MAX_WEEKDAY_INDEX, Role};
pub use shift::{Shift, ShiftType, parse_instant};
pub use time_slot::{AssignedStaff, TimeSlot};
