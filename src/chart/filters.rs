use anyhow::{bail, Result};
use clap::ValueEnum;
use std::collections::HashSet;

use crate::model::{Medal, Season};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ChartKind {
    /// Medals per year for one team
    Medals,
    /// Teams ranked by medal count
    TopTeams,
}

/// Filter tokens recognised on the command line, in any order
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Filters {
    pub season: Option<Season>,
    pub noc: Option<String>,
    pub medal: Option<Medal>,
    pub year: Option<i32>,
}

fn parse_year(token: &str) -> Option<i32> {
    if token.len() == 4 && token.bytes().all(|b| b.is_ascii_digit()) {
        token.parse().ok()
    } else {
        None
    }
}

impl Filters {
    /// Classify each token as season, medal, year or NOC code. A NOC must
    /// exist in `known_nocs`.
    pub fn parse(tokens: &[String], known_nocs: &HashSet<String>) -> Result<Self> {
        let mut filters = Filters::default();

        for token in tokens {
            if let Some(season) = Season::parse(token) {
                filters.season = Some(season);
            } else if let Some(medal) = Medal::from_token(token) {
                filters.medal = Some(medal);
            } else if let Some(year) = parse_year(token) {
                filters.year = Some(year);
            } else if known_nocs.contains(&token.to_ascii_uppercase()) {
                filters.noc = Some(token.to_ascii_uppercase());
            } else {
                bail!(
                    "Unrecognised filter {:?}: expected a season, NOC code, medal or year",
                    token
                );
            }
        }

        Ok(filters)
    }

    pub fn require_season(&self, kind: ChartKind) -> Result<Season> {
        match self.season {
            Some(season) => Ok(season),
            None => bail!("{:?} chart needs a season (summer or winter)", kind),
        }
    }
}
