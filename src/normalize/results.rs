use anyhow::{Context, Result};
use tracing::debug;

use super::athletes::Athletes;
use super::catalog::Catalog;
use super::games::Games;
use crate::model::{GameKey, Medal, ParticipationResult};
use crate::parser::{clean_athlete_name, RawRow};

/// Participation results plus the count of rows dropped for an unrecognised game
#[derive(Debug, Clone, Default)]
pub struct Results {
    pub rows: Vec<ParticipationResult>,
    pub dropped: usize,
}

/// Resolve every row against the already built entity sets. Rows whose
/// `Games` value is not a retained game are dropped; any other failed
/// lookup is an error.
pub fn extract_results(
    rows: &[RawRow],
    games: &Games,
    sports: &Catalog,
    events: &Catalog,
    athletes: &Athletes,
) -> Result<Results> {
    let mut results = Results::default();

    for (idx, row) in rows.iter().enumerate() {
        let game_id = match GameKey::parse_games(&row.games).and_then(|key| games.game_id(&key)) {
            Some(id) => id,
            None => {
                debug!(row = idx + 1, games = %row.games, "Dropping result for unrecognised game");
                results.dropped += 1;
                continue;
            }
        };

        let name = clean_athlete_name(&row.name);
        let athlete_id = athletes
            .athlete_id(&name)
            .with_context(|| format!("No athlete {:?} for data row {}", name, idx + 1))?;
        let sport_id = sports
            .id_of(&row.sport)
            .with_context(|| format!("No sport {:?} for data row {}", row.sport, idx + 1))?;
        let event_id = events
            .id_of(&row.event)
            .with_context(|| format!("No event {:?} for data row {}", row.event, idx + 1))?;

        results.rows.push(ParticipationResult {
            athlete_id,
            game_id,
            sport_id,
            event_id,
            medal: Medal::from_cell(row.medal.as_deref()),
        });
    }

    Ok(results)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Season;
    use crate::normalize::test_rows::row;
    use crate::normalize::{
        extract_athletes, extract_events, extract_games, extract_sports, extract_teams,
    };

    fn results_of(rows: &[RawRow]) -> Results {
        let teams = extract_teams(rows);
        let athletes = extract_athletes(rows, &teams).unwrap();
        extract_results(
            rows,
            &extract_games(rows),
            &extract_sports(rows),
            &extract_events(rows),
            &athletes,
        )
        .unwrap()
    }

    #[test]
    fn test_unrecognised_games_are_dropped() {
        let rows = vec![
            row().game(1992, Season::Summer, "Barcelona").build(),
            row().game(1906, Season::Summer, "Athina").build(),
            row().games_text("sometime").build(),
            row().game(1994, Season::Winter, "Lillehammer").build(),
        ];
        let results = results_of(&rows);
        assert_eq!(results.rows.len(), 2);
        assert_eq!(results.dropped, 2);
        assert_eq!(results.rows[0].game_id, 0);
        assert_eq!(results.rows[1].game_id, 1);
    }

    #[test]
    fn test_medal_codes() {
        let rows = vec![
            row().medal(Some("Gold")).build(),
            row().medal(Some("Bronze")).build(),
            row().medal(None).build(),
        ];
        let codes: Vec<i64> = results_of(&rows).rows.iter().map(|r| r.medal.code()).collect();
        assert_eq!(codes, vec![1, 3, 0]);
    }

    #[test]
    fn test_athlete_linked_by_cleaned_name() {
        let rows = vec![
            row().name("Other Person").build(),
            row().name("Jane Doe (Smith)").build(),
            row().name(r#"Jane "JD" Doe"#).build(),
        ];
        let results = results_of(&rows);
        let ids: Vec<i64> = results.rows.iter().map(|r| r.athlete_id).collect();
        assert_eq!(ids, vec![0, 1, 1]);
    }

    #[test]
    fn test_sport_and_event_ids_resolve() {
        let rows = vec![
            row().sport("Judo").event("Judo Men's").build(),
            row().sport("Luge").event("Luge Mixed").build(),
        ];
        let results = results_of(&rows);
        assert_eq!(results.rows[1].sport_id, 1);
        assert_eq!(results.rows[1].event_id, 1);
    }
}
