//! Rules loading functionality.
//!
//! This module provides the [`RulesLoader`] type for loading the rules table
//! from YAML files.

use std::fs;
use std::path::Path;

use crate::error::{EngineError, EngineResult};

use super::types::{HolidaysConfig, RulesConfig};

/// Loads the rules table once at process start.
///
/// # Directory Structure
///
/// ```text
/// config/default/
/// ├── rules.yaml     # Hard limits, soft weights and penalties
/// └── holidays.yaml  # Optional public holiday list
/// ```
///
/// # Example
///
/// ```no_run
/// use shift_engine::config::RulesLoader;
///
/// let loader = RulesLoader::load("./config/default").unwrap();
/// println!("Max weekly hours: {}", loader.rules().hard.max_weekly_hours);
/// ```
#[derive(Debug, Clone)]
pub struct RulesLoader {
    rules: RulesConfig,
}

impl RulesLoader {
    /// Loads rules from the specified directory.
    ///
    /// Returns an error if `rules.yaml` is missing, if either file contains
    /// invalid YAML, or if a loaded value breaks a rules invariant.
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();

        let mut rules = Self::load_yaml::<RulesConfig>(&path.join("rules.yaml"))?;

        let holidays_path = path.join("holidays.yaml");
        if holidays_path.exists() {
            let holidays = Self::load_yaml::<HolidaysConfig>(&holidays_path)?;
            rules.public_holidays.extend(holidays.public_holidays);
        }

        rules.validate()?;

        Ok(Self { rules })
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> EngineResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    /// Returns the loaded rules.
    pub fn rules(&self) -> &RulesConfig {
        &self.rules
    }

    /// Consumes the loader, returning the rules.
    pub fn into_rules(self) -> RulesConfig {
        self.rules
    }
}
