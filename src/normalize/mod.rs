//! Entity extraction from the flat participation rows.
//!
//! Teams, games, sports and events only read the rows. Athletes need the
//! finished team set and results need everything else, so `Dataset::build`
//! runs the extractors in that order over one in-memory row list.

pub mod athletes;
pub mod catalog;
pub mod games;
pub mod identity;
pub mod results;
pub mod teams;

#[cfg(test)]
pub(crate) mod test_rows;

pub use athletes::{extract_athletes, Athletes};
pub use catalog::{extract_events, extract_sports, Catalog};
pub use games::{extract_games, is_official, Games};
pub use identity::Registry;
pub use results::{extract_results, Results};
pub use teams::{extract_teams, Teams};

use anyhow::{Context, Result};
use tracing::info;

use crate::parser::RawRow;

/// All five entity sets plus results, ready to load
#[derive(Debug, Clone, Default)]
pub struct Dataset {
    pub teams: Teams,
    pub games: Games,
    pub sports: Catalog,
    pub events: Catalog,
    pub athletes: Athletes,
    pub results: Results,
}

impl Dataset {
    pub fn build(rows: &[RawRow]) -> Result<Self> {
        let teams = extract_teams(rows);
        let games = extract_games(rows);
        let sports = extract_sports(rows);
        let events = extract_events(rows);
        info!(
            teams = teams.len(),
            games = games.len(),
            sports = sports.len(),
            events = events.len(),
            "Extracted independent entities"
        );

        let athletes = extract_athletes(rows, &teams).context("Failed to build athletes")?;
        info!(athletes = athletes.len(), "Extracted athletes");

        let results = extract_results(rows, &games, &sports, &events, &athletes)
            .context("Failed to build results")?;
        info!(
            results = results.rows.len(),
            dropped = results.dropped,
            "Extracted results"
        );

        Ok(Self {
            teams,
            games,
            sports,
            events,
            athletes,
            results,
        })
    }
}
