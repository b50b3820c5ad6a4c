//! Application state for the shift engine API.

use std::sync::Arc;

use crate::config::RulesConfig;
use crate::engine::SchedulerEngine;

/// Shared application state.
///
/// Holds the rules table every request is evaluated against. It is loaded
/// once at startup and never changes.
#[derive(Clone)]
pub struct AppState {
    rules: Arc<RulesConfig>,
}

impl AppState {
    /// Creates a new application state over the given rules.
    pub fn new(rules: RulesConfig) -> Self {
        Self {
            rules: Arc::new(rules),
        }
    }

    /// Returns the rules table.
    pub fn rules(&self) -> &RulesConfig {
        &self.rules
    }

    /// Returns an engine borrowing the shared rules.
    pub fn engine(&self) -> SchedulerEngine<'_> {
        SchedulerEngine::new(&self.rules)
    }
}
