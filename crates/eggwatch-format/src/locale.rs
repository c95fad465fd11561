//! Lookup tables for weather, team and leader names.
//!
//! [`LocaleTable::default`] carries the English names. A translation file
//! is a JSON object with any of the sections `weather`, `teams`,
//! `team_colors` and `leaders`, each mapping a numeric code (as a string
//! key) to its name; missing sections keep the English defaults.

use crate::error::{read_file, Result};
use eggwatch_core::{Field, Locale, Unknown};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LocaleTable {
    pub weather: BTreeMap<i64, String>,
    pub teams: BTreeMap<i64, String>,
    pub team_colors: BTreeMap<i64, String>,
    pub leaders: BTreeMap<i64, String>,
}

impl Default for LocaleTable {
    fn default() -> Self {
        Self {
            weather: table(&[
                (0, "None"),
                (1, "Clear"),
                (2, "Rain"),
                (3, "Partly Cloudy"),
                (4, "Cloudy"),
                (5, "Windy"),
                (6, "Snow"),
                (7, "Fog"),
            ]),
            teams: table(&[(0, "Neutral"), (1, "Mystic"), (2, "Valor"), (3, "Instinct")]),
            team_colors: table(&[(0, "Gray"), (1, "Blue"), (2, "Red"), (3, "Yellow")]),
            leaders: table(&[
                (0, "Professor Willow"),
                (1, "Blanche"),
                (2, "Candela"),
                (3, "Spark"),
            ]),
        }
    }
}

impl LocaleTable {
    /// Parses a translation file's contents.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_path(path: &Path) -> Result<Self> {
        Self::from_json(&read_file(path)?)
    }
}

impl Locale for LocaleTable {
    fn weather_name(&self, weather_id: Field<i64>) -> Field<String> {
        lookup(&self.weather, weather_id)
    }

    fn team_name(&self, team_id: Field<i64>) -> Field<String> {
        lookup(&self.teams, team_id)
    }

    fn team_color(&self, team_id: Field<i64>) -> Field<String> {
        lookup(&self.team_colors, team_id)
    }

    fn leader_name(&self, team_id: Field<i64>) -> Field<String> {
        lookup(&self.leaders, team_id)
    }
}

fn table(entries: &[(i64, &str)]) -> BTreeMap<i64, String> {
    entries
        .iter()
        .map(|(code, name)| (*code, (*name).to_string()))
        .collect()
}

fn lookup(names: &BTreeMap<i64, String>, code: Field<i64>) -> Field<String> {
    code.and_then(|c| Field::from_option(names.get(&c).cloned(), Unknown::Regular))
        .map_or_unknown(Unknown::Regular, |name| name)
}
