use super::identity::Registry;
use crate::config::UNOFFICIAL_GAME_YEAR;
use crate::model::{Game, GameKey, Season};
use crate::parser::RawRow;

/// The 1906 Summer edition is not counted as an official game
pub fn is_official(key: &GameKey) -> bool {
    !(key.year == UNOFFICIAL_GAME_YEAR && key.season == Season::Summer)
}

/// Official games keyed by year and season, with their accumulated host cities
#[derive(Debug, Clone, Default)]
pub struct Games {
    by_key: Registry<GameKey, String>,
}

impl Games {
    pub fn game_id(&self, key: &GameKey) -> Option<i64> {
        self.by_key.id_of(key)
    }

    pub fn len(&self) -> usize {
        self.by_key.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_key.is_empty()
    }

    pub fn entities(&self) -> Vec<Game> {
        self.by_key
            .iter()
            .map(|(id, key, cities)| Game {
                id,
                key: *key,
                cities: cities.clone(),
            })
            .collect()
    }
}

pub fn extract_games(rows: &[RawRow]) -> Games {
    let mut by_key: Registry<GameKey, String> = Registry::new();

    for row in rows {
        let Some(year) = row.year else {
            continue;
        };
        let key = GameKey::new(year, row.season);
        if !is_official(&key) {
            continue;
        }

        let (_, cities) = by_key.get_or_insert_with(key, String::new);
        // Substring check: a city whose name is contained in an already listed
        // one is not appended.
        if cities.is_empty() {
            cities.push_str(&row.city);
        } else if !cities.contains(row.city.as_str()) {
            cities.push_str(", ");
            cities.push_str(&row.city);
        }
    }

    Games { by_key }
}
