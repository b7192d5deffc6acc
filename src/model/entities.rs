use serde::Serialize;
use std::fmt;

use super::codes::{Medal, Season, Sex};

/// Composite identity of an Olympic edition. The same year can host both a
/// Summer and a Winter edition, so the year alone is not a key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct GameKey {
    pub year: i32,
    pub season: Season,
}

impl GameKey {
    pub fn new(year: i32, season: Season) -> Self {
        Self { year, season }
    }

    /// Parse the dataset's `Games` column, e.g. `"1992 Summer"`
    pub fn parse_games(text: &str) -> Option<GameKey> {
        let (year, season) = text.trim().split_once(' ')?;
        Some(GameKey {
            year: year.parse().ok()?,
            season: Season::parse(season)?,
        })
    }
}

impl fmt::Display for GameKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}_{}", self.year, self.season)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Team {
    pub id: i64,
    pub noc_code: String,
    pub display_name: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Game {
    pub id: i64,
    pub key: GameKey,
    /// Distinct host cities, comma-joined
    pub cities: String,
}

/// Body measurements; each one is independently optional
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct Parameters {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weight: Option<f64>,
}

impl Parameters {
    /// JSON object text stored in `athletes.parameters`; `{}` when nothing is known
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Athlete {
    pub id: i64,
    pub name: String,
    pub sex: Option<Sex>,
    pub year_of_birth: Option<i32>,
    pub parameters: Parameters,
    pub team_id: i64,
}

/// One participation row; has no surrogate key of its own
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParticipationResult {
    pub athlete_id: i64,
    pub game_id: i64,
    pub sport_id: i64,
    pub event_id: i64,
    pub medal: Medal,
}
