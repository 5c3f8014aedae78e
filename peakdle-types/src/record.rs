use crate::Guess;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// The single point that formats a calendar day for storage. Absolute
/// `YYYY-MM-DD`, never locale-formatted, so markers written by older builds
/// keep comparing correctly.
pub fn day_stamp(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

/// Today's marker by the local device clock.
pub fn today_stamp() -> String {
    day_stamp(chrono::Local::now().date_naive())
}

/// Outcome of a day's attempt. Modes without a binary win/lose (the
/// image-reveal mode) record how many guesses the badge took instead.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum Outcome {
    #[default]
    Unresolved,
    Won,
    Lost,
    GuessCount(u32),
}

/// Persisted result of today's attempt for one mode key. Every field
/// defaults so a record missing a sub-field still deserializes; a missing or
/// stale `date` simply fails the "played today" gate.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct DailyRecord {
    #[serde(default)]
    pub date: String,
    #[serde(default)]
    pub result: Outcome,
    #[serde(default)]
    pub primary_guesses: Vec<Guess>,
    #[serde(default)]
    pub secondary_guesses: Vec<String>,
}

impl DailyRecord {
    /// Marker equality with the given day stamp is the sole "already played"
    /// gate; any other marker means the record is logically reset.
    pub fn is_for(&self, stamp: &str) -> bool {
        self.date == stamp
    }
}
