//! Gap resolution for the shift engine.
//!
//! The [`SchedulerEngine`] ties the hard validator and the soft scorer
//! together: it filters candidates by legality, ranks the survivors by
//! burden and folds every failure into a [`Decision`](crate::models::Decision).

mod scheduler;

pub use scheduler::{DEFAULT_SHIFT_DURATION_HOURS, SchedulerEngine};
