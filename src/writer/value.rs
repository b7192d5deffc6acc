use anyhow::Result;

use crate::model::{Athlete, Game, ParticipationResult, Team};
use crate::normalize::{Catalog, Dataset};
use crate::schema::TableKind;

/// A single bound parameter
#[derive(Debug, Clone, PartialEq)]
pub enum SqlValue {
    Null,
    Integer(i64),
    Text(String),
}

impl SqlValue {
    pub fn bind_to(&self, idx: usize, stmt: &mut rusqlite::Statement) -> rusqlite::Result<()> {
        match self {
            SqlValue::Null => stmt.raw_bind_parameter(idx, rusqlite::types::Null)?,
            SqlValue::Integer(i) => stmt.raw_bind_parameter(idx, i)?,
            SqlValue::Text(s) => stmt.raw_bind_parameter(idx, s.as_str())?,
        }
        Ok(())
    }
}

impl<T: Into<SqlValue>> From<Option<T>> for SqlValue {
    fn from(value: Option<T>) -> Self {
        value.map(Into::into).unwrap_or(SqlValue::Null)
    }
}

impl From<i64> for SqlValue {
    fn from(value: i64) -> Self {
        SqlValue::Integer(value)
    }
}

impl From<i32> for SqlValue {
    fn from(value: i32) -> Self {
        SqlValue::Integer(value.into())
    }
}

impl From<String> for SqlValue {
    fn from(value: String) -> Self {
        SqlValue::Text(value)
    }
}

impl From<&str> for SqlValue {
    fn from(value: &str) -> Self {
        SqlValue::Text(value.to_string())
    }
}

/// Values in the column order of the matching table schema
pub type SqlRow = Vec<SqlValue>;

fn game_row(game: &Game) -> SqlRow {
    vec![
        game.id.into(),
        game.key.year.into(),
        game.key.season.code().into(),
        game.cities.as_str().into(),
    ]
}

fn team_row(team: &Team) -> SqlRow {
    vec![
        team.id.into(),
        team.display_name.as_str().into(),
        team.noc_code.as_str().into(),
    ]
}

fn athlete_row(athlete: &Athlete) -> Result<SqlRow> {
    Ok(vec![
        athlete.id.into(),
        athlete.name.as_str().into(),
        athlete.year_of_birth.into(),
        athlete.sex.map(|s| s.as_str()).into(),
        athlete.parameters.to_json()?.into(),
        athlete.team_id.into(),
    ])
}

fn result_row(result: &ParticipationResult) -> SqlRow {
    vec![
        result.athlete_id.into(),
        result.game_id.into(),
        result.sport_id.into(),
        result.event_id.into(),
        result.medal.code().into(),
    ]
}

fn catalog_rows(catalog: &Catalog) -> Vec<SqlRow> {
    catalog
        .iter()
        .map(|(id, name)| -> SqlRow { vec![id.into(), name.into()] })
        .collect()
}

/// Rows of one table, built from the matching entity set
pub fn table_rows(dataset: &Dataset, kind: TableKind) -> Result<Vec<SqlRow>> {
    let rows: Vec<SqlRow> = match kind {
        TableKind::Games => dataset.games.entities().iter().map(game_row).collect(),
        TableKind::Teams => dataset.teams.entities().iter().map(team_row).collect(),
        TableKind::Sports => catalog_rows(&dataset.sports),
        TableKind::Events => catalog_rows(&dataset.events),
        TableKind::Athletes => dataset
            .athletes
            .entities()
            .iter()
            .map(athlete_row)
            .collect::<Result<_>>()?,
        TableKind::Results => dataset.results.rows.iter().map(result_row).collect(),
    };
    Ok(rows)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Medal, Parameters, Sex};
    use crate::schema::ALL_TABLES;

    #[test]
    fn test_option_maps_to_null() {
        assert_eq!(SqlValue::from(None::<i32>), SqlValue::Null);
        assert_eq!(SqlValue::from(Some(1970)), SqlValue::Integer(1970));
    }

    #[test]
    fn test_athlete_row_values() {
        let athlete = Athlete {
            id: 3,
            name: "A B".to_string(),
            sex: Some(Sex::Male),
            year_of_birth: None,
            parameters: Parameters { height: None, weight: Some(80.0) },
            team_id: 0,
        };
        let row = athlete_row(&athlete).unwrap();
        assert_eq!(
            row,
            vec![
                SqlValue::Integer(3),
                SqlValue::Text("A B".to_string()),
                SqlValue::Null,
                SqlValue::Text("M".to_string()),
                SqlValue::Text(r#"{"weight":80.0}"#.to_string()),
                SqlValue::Integer(0),
            ]
        );
    }

    #[test]
    fn test_result_row_medal_code() {
        let result = ParticipationResult {
            athlete_id: 1,
            game_id: 2,
            sport_id: 3,
            event_id: 4,
            medal: Medal::Silver,
        };
        assert_eq!(result_row(&result)[4], SqlValue::Integer(2));
    }

    #[test]
    fn test_row_widths_match_schemas() {
        let game = Game {
            id: 0,
            key: crate::model::GameKey::new(1992, crate::model::Season::Summer),
            cities: "Barcelona".to_string(),
        };
        let team = Team {
            id: 0,
            noc_code: "USA".to_string(),
            display_name: "United States".to_string(),
        };
        for schema in ALL_TABLES {
            let width = match schema.kind {
                TableKind::Games => game_row(&game).len(),
                TableKind::Teams => team_row(&team).len(),
                TableKind::Sports | TableKind::Events => 2,
                TableKind::Athletes => 6,
                TableKind::Results => 5,
            };
            assert_eq!(width, schema.columns.len(), "{}", schema.name);
        }
    }
}
