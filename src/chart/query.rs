use anyhow::{bail, Context, Result};
use rusqlite::{params, Connection, OpenFlags};
use std::collections::HashSet;
use std::path::Path;
use tracing::debug;

use super::filters::{ChartKind, Filters};
use super::render::Bar;

// Without a medal filter only medal-winning results (medal > 0) are counted,
// not every participation.
const MEDALS_BY_YEAR: &str = "
    SELECT g.year, COUNT(*)
    FROM results r
    JOIN athletes a ON a.id = r.athlete_id
    JOIN teams t ON t.id = a.team_id
    JOIN games g ON g.id = r.game_id
    WHERE g.season = ?1
      AND t.noc_code = ?2
      AND ((?3 IS NULL AND r.medal > 0) OR r.medal = ?3)
      AND (?4 IS NULL OR g.year = ?4)
    GROUP BY g.year
    ORDER BY g.year";

const TOP_TEAMS: &str = "
    SELECT t.noc_code, COUNT(*) AS amount
    FROM results r
    JOIN athletes a ON a.id = r.athlete_id
    JOIN teams t ON t.id = a.team_id
    JOIN games g ON g.id = r.game_id
    WHERE g.season = ?1
      AND ((?2 IS NULL AND r.medal > 0) OR r.medal = ?2)
      AND (?3 IS NULL OR g.year = ?3)
    GROUP BY t.noc_code
    ORDER BY amount DESC, t.noc_code
    LIMIT ?4";

/// Read-only access to a loaded database
pub struct StatsDb {
    conn: Connection,
}

impl StatsDb {
    pub fn open(db_path: &Path) -> Result<Self> {
        let conn = Connection::open_with_flags(db_path, OpenFlags::SQLITE_OPEN_READ_ONLY)
            .with_context(|| format!("Failed to open database {:?}", db_path))?;
        Ok(Self { conn })
    }

    pub fn noc_codes(&self) -> Result<HashSet<String>> {
        let mut stmt = self.conn.prepare("SELECT noc_code FROM teams")?;
        let codes = stmt
            .query_map([], |row| row.get::<_, String>(0))?
            .collect::<rusqlite::Result<_>>()?;
        Ok(codes)
    }

    /// Medal count per game year for one team
    pub fn medals_by_year(&self, filters: &Filters) -> Result<Vec<Bar>> {
        let season = filters.require_season(ChartKind::Medals)?;
        let Some(noc) = filters.noc.as_deref() else {
            bail!("Medals chart needs a NOC code and a season; medal and year are optional");
        };
        debug!(%season, noc, "Querying medals by year");

        let mut stmt = self.conn.prepare(MEDALS_BY_YEAR)?;
        let bars = stmt
            .query_map(
                params![
                    season.code(),
                    noc,
                    filters.medal.map(|m| m.code()),
                    filters.year
                ],
                |row| {
                    Ok(Bar {
                        label: row.get::<_, i64>(0)?.to_string(),
                        value: row.get(1)?,
                    })
                },
            )?
            .collect::<rusqlite::Result<_>>()?;
        Ok(bars)
    }

    /// Teams with the most medals, best first
    pub fn top_teams(&self, filters: &Filters, limit: usize) -> Result<Vec<Bar>> {
        let season = filters.require_season(ChartKind::TopTeams)?;
        debug!(%season, limit, "Querying top teams");

        let mut stmt = self.conn.prepare(TOP_TEAMS)?;
        let bars = stmt
            .query_map(
                params![
                    season.code(),
                    filters.medal.map(|m| m.code()),
                    filters.year,
                    limit as i64
                ],
                |row| {
                    Ok(Bar {
                        label: row.get(0)?,
                        value: row.get(1)?,
                    })
                },
            )?
            .collect::<rusqlite::Result<_>>()?;
        Ok(bars)
    }

    pub fn chart(&self, kind: ChartKind, tokens: &[String], limit: usize) -> Result<Vec<Bar>> {
        let filters = Filters::parse(tokens, &self.noc_codes()?)?;
        match kind {
            ChartKind::Medals => self.medals_by_year(&filters),
            ChartKind::TopTeams => self.top_teams(&filters, limit),
        }
    }
}
