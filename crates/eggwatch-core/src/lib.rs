#![warn(clippy::unwrap_used, clippy::expect_used)]

//! Core types for eggwatch.
//!
//! Defines the pieces every event crate shares:
//!
//! - [`Field`] / [`Unknown`] - typed values with width-aware "unknown" sentinels
//! - [`raw`] - the flat feed payload and its coerce-or-default helpers
//! - [`GymCache`] / [`Locale`] - read-only collaborators consulted while
//!   enriching and flattening events
//! - [`Units`] - the measurement system distances are rendered in

mod field;
pub mod raw;

pub use field::{Field, Unknown};
pub use raw::RawEvent;

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Cached gym state from earlier feed events.
///
/// Lookups must be cheap and side-effect free; a miss (cache not warmed
/// yet) is reported as [`Field::Unknown`], never as an error.
pub trait GymCache {
    /// Number of open raid slots at `gym_id`.
    fn slots_for(&self, gym_id: &str) -> Field<i64>;
}

impl<C: GymCache + ?Sized> GymCache for &C {
    fn slots_for(&self, gym_id: &str) -> Field<i64> {
        (**self).slots_for(gym_id)
    }
}

/// Translations for the coded values of an event.
///
/// Every method is total: unknown or unmapped codes yield
/// [`Field::Unknown`] instead of failing.
pub trait Locale {
    fn weather_name(&self, weather_id: Field<i64>) -> Field<String>;
    fn team_name(&self, team_id: Field<i64>) -> Field<String>;
    fn team_color(&self, team_id: Field<i64>) -> Field<String>;
    fn leader_name(&self, team_id: Field<i64>) -> Field<String>;
}

impl<L: Locale + ?Sized> Locale for &L {
    fn weather_name(&self, weather_id: Field<i64>) -> Field<String> {
        (**self).weather_name(weather_id)
    }
    fn team_name(&self, team_id: Field<i64>) -> Field<String> {
        (**self).team_name(team_id)
    }
    fn team_color(&self, team_id: Field<i64>) -> Field<String> {
        (**self).team_color(team_id)
    }
    fn leader_name(&self, team_id: Field<i64>) -> Field<String> {
        (**self).leader_name(team_id)
    }
}

/// Measurement system for rendered distances.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Units {
    #[default]
    Metric,
    Imperial,
}

impl Units {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Units::Metric => "metric",
            Units::Imperial => "imperial",
        }
    }
}

impl fmt::Display for Units {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Units {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "metric" => Ok(Units::Metric),
            "imperial" => Ok(Units::Imperial),
            other => Err(format!(
                "unknown units '{other}' (expected 'metric' or 'imperial')"
            )),
        }
    }
}
