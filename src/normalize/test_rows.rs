//! Row fixtures for extractor tests

use crate::model::Season;
use crate::parser::RawRow;

pub struct RowBuilder {
    row: RawRow,
}

pub fn row() -> RowBuilder {
    RowBuilder {
        row: RawRow {
            source_id: "1".to_string(),
            name: "A B".to_string(),
            sex: Some("M".to_string()),
            age: Some(22),
            height: None,
            weight: Some(80.0),
            team: "United States".to_string(),
            noc: Some("USA".to_string()),
            games: "1992 Summer".to_string(),
            year: Some(1992),
            season: Season::Summer,
            city: "Barcelona".to_string(),
            sport: "Judo".to_string(),
            event: "Judo Men's".to_string(),
            medal: None,
        },
    }
}

impl RowBuilder {
    pub fn name(mut self, name: &str) -> Self {
        self.row.name = name.to_string();
        self
    }

    pub fn sex(mut self, sex: Option<&str>) -> Self {
        self.row.sex = sex.map(str::to_string);
        self
    }

    pub fn age(mut self, age: Option<i32>) -> Self {
        self.row.age = age;
        self
    }

    pub fn height(mut self, height: Option<f64>) -> Self {
        self.row.height = height;
        self
    }

    pub fn weight(mut self, weight: Option<f64>) -> Self {
        self.row.weight = weight;
        self
    }

    pub fn team(mut self, team: &str) -> Self {
        self.row.team = team.to_string();
        self
    }

    pub fn noc(mut self, noc: &str) -> Self {
        self.row.noc = Some(noc.to_string());
        self
    }

    pub fn no_noc(mut self) -> Self {
        self.row.noc = None;
        self
    }

    /// Sets Year, Season, City and the matching Games text
    pub fn game(mut self, year: i32, season: Season, city: &str) -> Self {
        self.row.year = Some(year);
        self.row.season = season;
        self.row.city = city.to_string();
        self.row.games = format!("{} {}", year, season);
        self
    }

    pub fn no_year(mut self) -> Self {
        self.row.year = None;
        self
    }

    pub fn games_text(mut self, games: &str) -> Self {
        self.row.games = games.to_string();
        self
    }

    pub fn sport(mut self, sport: &str) -> Self {
        self.row.sport = sport.to_string();
        self
    }

    pub fn event(mut self, event: &str) -> Self {
        self.row.event = event.to_string();
        self
    }

    pub fn medal(mut self, medal: Option<&str>) -> Self {
        self.row.medal = medal.map(str::to_string);
        self
    }

    pub fn build(self) -> RawRow {
        self.row
    }
}
