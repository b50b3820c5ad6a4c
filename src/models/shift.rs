//! Shift model and related types.
//!
//! This module defines the [`Shift`] struct and [`ShiftType`] enum for
//! representing concrete work intervals, plus [`parse_instant`] for turning
//! caller-supplied timestamps into the engine's wall-clock instants.

use chrono::{DateTime, Datelike, NaiveDate, NaiveDateTime};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// The kind of work a shift represents.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ShiftType {
    /// An ordinary opening-hours shift.
    #[default]
    Standard,
    /// A rostered night shift.
    Night,
    /// An on-call duty period.
    OnCall,
}

/// Represents a work interval, either already rostered or hypothetical.
///
/// The engine builds a fresh draft shift for every candidate it evaluates and
/// never mutates a shift handed to it by the caller.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Shift {
    /// Unique identifier for the shift.
    pub id: String,
    /// The employee holding the shift; `None` for a draft shift.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub employee_id: Option<String>,
    /// The start of the shift.
    pub start: NaiveDateTime,
    /// The end of the shift (strictly after `start`).
    pub end: NaiveDateTime,
    /// The kind of shift.
    #[serde(default, rename = "type")]
    pub shift_type: ShiftType,
}

impl Shift {
    /// Creates a shift, rejecting intervals whose end is not after their start.
    ///
    /// # Examples
    ///
    /// ```
    /// use shift_engine::models::{Shift, ShiftType};
    /// use chrono::NaiveDateTime;
    ///
    /// let start = NaiveDateTime::parse_from_str("2026-01-12 09:00:00", "%Y-%m-%d %H:%M:%S").unwrap();
    /// let end = NaiveDateTime::parse_from_str("2026-01-12 17:00:00", "%Y-%m-%d %H:%M:%S").unwrap();
    ///
    /// let shift = Shift::new("shift_001", Some("emp_001".to_string()), start, end, ShiftType::Standard).unwrap();
    /// assert_eq!(shift.id, "shift_001");
    ///
    /// assert!(Shift::new("shift_002", None, end, start, ShiftType::Standard).is_err());
    /// ```
    pub fn new(
        id: impl Into<String>,
        employee_id: Option<String>,
        start: NaiveDateTime,
        end: NaiveDateTime,
        shift_type: ShiftType,
    ) -> EngineResult<Self> {
        let shift = Self {
            id: id.into(),
            employee_id,
            start,
            end,
            shift_type,
        };
        shift.validate()?;
        Ok(shift)
    }

    /// Creates a standard shift with no holder yet.
    pub fn draft(
        id: impl Into<String>,
        start: NaiveDateTime,
        end: NaiveDateTime,
    ) -> EngineResult<Self> {
        Self::new(id, None, start, end, ShiftType::Standard)
    }

    /// Checks the shift invariant: `end` must be strictly after `start`.
    pub fn validate(&self) -> EngineResult<()> {
        if self.end <= self.start {
            return Err(EngineError::InvalidShift {
                shift_id: self.id.clone(),
                message: format!(
                    "end time {} must be after start time {}",
                    self.end, self.start
                ),
            });
        }
        Ok(())
    }

    /// Returns the absolute duration of the shift in hours.
    ///
    /// # Examples
    ///
    /// ```
    /// use shift_engine::models::Shift;
    /// use chrono::NaiveDateTime;
    /// use rust_decimal::Decimal;
    ///
    /// let shift = Shift::draft(
    ///     "shift_001",
    ///     NaiveDateTime::parse_from_str("2026-01-15 22:00:00", "%Y-%m-%d %H:%M:%S").unwrap(),
    ///     NaiveDateTime::parse_from_str("2026-01-16 06:30:00", "%Y-%m-%d %H:%M:%S").unwrap(),
    /// ).unwrap();
    /// assert_eq!(shift.hours(), Decimal::new(85, 1)); // 8.5 hours
    /// ```
    pub fn hours(&self) -> Decimal {
        let minutes = (self.end - self.start).num_minutes().abs();
        Decimal::new(minutes, 0) / Decimal::new(60, 0)
    }

    /// Returns the calendar date the shift starts on.
    pub fn date(&self) -> NaiveDate {
        self.start.date()
    }

    /// Returns the start weekday as 0 (Sunday) through 6 (Saturday).
    pub fn weekday_index(&self) -> u8 {
        // num_days_from_sunday is always in 0..=6
        self.start.weekday().num_days_from_sunday() as u8
    }

    /// Returns true if the two shifts share any instant.
    pub fn overlaps(&self, other: &Shift) -> bool {
        self.start < other.end && other.start < self.end
    }
}

/// Parses a caller-supplied timestamp into a wall-clock instant.
///
/// Accepts RFC 3339 (the offset is dropped, keeping local wall-clock time),
/// ISO-8601 date-times with or without seconds, and bare dates (midnight).
///
/// # Examples
///
/// ```
/// use shift_engine::models::parse_instant;
///
/// let instant = parse_instant("2026-01-12T09:00:00").unwrap();
/// assert_eq!(instant.to_string(), "2026-01-12 09:00:00");
///
/// let with_offset = parse_instant("2026-01-12T09:00:00+01:00").unwrap();
/// assert_eq!(with_offset.to_string(), "2026-01-12 09:00:00");
///
/// assert!(parse_instant("next tuesday").is_err());
/// ```
pub fn parse_instant(raw: &str) -> Result<NaiveDateTime, String> {
    let raw = raw.trim();

    if let Ok(instant) = DateTime::parse_from_rfc3339(raw) {
        return Ok(instant.naive_local());
    }

    const FORMATS: [&str; 5] = [
        "%Y-%m-%dT%H:%M:%S",
        "%Y-%m-%dT%H:%M:%S%.f",
        "%Y-%m-%dT%H:%M",
        "%Y-%m-%d %H:%M:%S",
        "%Y-%m-%d %H:%M",
    ];
    for format in FORMATS {
        if let Ok(instant) = NaiveDateTime::parse_from_str(raw, format) {
            return Ok(instant);
        }
    }

    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .ok_or_else(|| format!("'{}' is not a recognised date-time", raw))
}
