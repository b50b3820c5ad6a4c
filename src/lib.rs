//! Shift gap resolution engine for pharmacy staffing.
//!
//! Given an uncovered time window and a pool of employees, the engine picks
//! the employee who can legally take the shift at the lowest soft cost. Hard
//! rules (daily rest, consecutive days, weekly hours) filter candidates; a
//! burden score built from time-of-week weights, preference penalties and
//! workload balance ranks the survivors.
//!
//! Every operation is a pure function of its inputs and an injected
//! [`config::RulesConfig`].

#![warn(missing_docs)]

pub mod api;
pub mod config;
pub mod constraints;
pub mod engine;
pub mod error;
pub mod models;
