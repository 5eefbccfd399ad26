//! Time-related types for ESPN Fantasy Football seasons and weeks.

use crate::error::{EspnError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Week used when no usable week is supplied.
pub const DEFAULT_WEEK: Week = Week(9);

/// Type-safe wrapper for Season years
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Season(pub u16);

impl Season {
    pub fn new(year: u16) -> Self {
        Self(year)
    }

    pub fn as_u16(&self) -> u16 {
        self.0
    }
}

impl Default for Season {
    fn default() -> Self {
        Self(2025)
    }
}

impl fmt::Display for Season {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for Season {
    type Err = EspnError;

    fn from_str(s: &str) -> Result<Self> {
        Ok(Self(s.parse()?))
    }
}

/// Type-safe wrapper for Week numbers (ESPN `scoringPeriodId`)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Week(pub u16);

impl Week {
    pub fn new(week: u16) -> Self {
        Self(week)
    }

    pub fn as_u16(&self) -> u16 {
        self.0
    }
}

impl Default for Week {
    fn default() -> Self {
        DEFAULT_WEEK
    }
}

impl fmt::Display for Week {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for Week {
    type Err = EspnError;

    fn from_str(s: &str) -> Result<Self> {
        Ok(Self(s.trim().parse()?))
    }
}

/// Where the week for a run came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WeekSource {
    /// Nothing supplied
    Default,
    /// Supplied and parsed
    Argument,
    /// Supplied but not an integer; holds the raw input
    Invalid(String),
}

/// The week a run will use, resolved leniently from optional user input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WeekSelection {
    pub week: Week,
    pub source: WeekSource,
}

impl WeekSelection {
    /// Resolve `raw` into a week. Missing or non-integer input falls back to
    /// `default`; it is never an error.
    pub fn resolve(raw: Option<&str>, default: Week) -> Self {
        match raw {
            None => Self {
                week: default,
                source: WeekSource::Default,
            },
            Some(s) => match s.parse::<Week>() {
                Ok(week) => Self {
                    week,
                    source: WeekSource::Argument,
                },
                Err(_) => Self {
                    week: default,
                    source: WeekSource::Invalid(s.to_string()),
                },
            },
        }
    }

    /// Warning for the user when the input was rejected.
    pub fn warning(&self) -> Option<String> {
        match &self.source {
            WeekSource::Invalid(raw) => Some(format!(
                "Invalid week number: {}. Using default week {}.",
                raw, self.week
            )),
            _ => None,
        }
    }

    /// One-line description of the chosen week.
    pub fn describe(&self) -> String {
        match &self.source {
            WeekSource::Default => format!(
                "Using default week {} (pass week number as argument to change)",
                self.week
            ),
            WeekSource::Argument => format!("Using week {} from command line argument", self.week),
            WeekSource::Invalid(_) => format!("Using default week {}", self.week),
        }
    }
}
