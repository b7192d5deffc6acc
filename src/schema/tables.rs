//! Table schema definitions for the olympic history database

use super::types::*;

// =============================================================================
// Independent tables
// =============================================================================

pub static GAMES: TableSchema = TableSchema {
    name: "games",
    kind: TableKind::Games,
    columns: &[
        Column::required("id", ColumnType::Integer),
        Column::required("year", ColumnType::Integer),
        Column::required("season", ColumnType::Integer),
        Column::required("city", ColumnType::Text),
    ],
    foreign_keys: &[],
};

pub static TEAMS: TableSchema = TableSchema {
    name: "teams",
    kind: TableKind::Teams,
    columns: &[
        Column::required("id", ColumnType::Integer),
        Column::required("display_name", ColumnType::Text),
        Column::required("noc_code", ColumnType::Text).unique(),
    ],
    foreign_keys: &[],
};

pub static SPORTS: TableSchema = TableSchema {
    name: "sports",
    kind: TableKind::Sports,
    columns: &[
        Column::required("id", ColumnType::Integer),
        Column::required("name", ColumnType::Text).unique(),
    ],
    foreign_keys: &[],
};

pub static EVENTS: TableSchema = TableSchema {
    name: "events",
    kind: TableKind::Events,
    columns: &[
        Column::required("id", ColumnType::Integer),
        Column::required("name", ColumnType::Text).unique(),
    ],
    foreign_keys: &[],
};

// =============================================================================
// Dependent tables
// =============================================================================

pub static ATHLETES: TableSchema = TableSchema {
    name: "athletes",
    kind: TableKind::Athletes,
    columns: &[
        Column::required("id", ColumnType::Integer),
        Column::required("name", ColumnType::Text),
        Column::new("year_of_birth", ColumnType::Integer),
        Column::new("sex", ColumnType::Text),
        Column::required("parameters", ColumnType::Json),
        Column::required("team_id", ColumnType::Integer),
    ],
    foreign_keys: &[ForeignKey::new("team_id", "teams")],
};

pub static RESULTS: TableSchema = TableSchema {
    name: "results",
    kind: TableKind::Results,
    columns: &[
        Column::required("athlete_id", ColumnType::Integer),
        Column::required("game_id", ColumnType::Integer),
        Column::required("sport_id", ColumnType::Integer),
        Column::required("event_id", ColumnType::Integer),
        Column::required("medal", ColumnType::Integer),
    ],
    foreign_keys: &[
        ForeignKey::new("athlete_id", "athletes"),
        ForeignKey::new("game_id", "games"),
        ForeignKey::new("sport_id", "sports"),
        ForeignKey::new("event_id", "events"),
    ],
};

/// All table schemas in load order
pub static ALL_TABLES: &[&TableSchema] = &[&GAMES, &TEAMS, &SPORTS, &EVENTS, &ATHLETES, &RESULTS];

/// Get table schema by name
pub fn get_table(name: &str) -> Option<&'static TableSchema> {
    ALL_TABLES.iter().find(|t| t.name == name).copied()
}

/// Get all table names
pub fn table_names() -> Vec<&'static str> {
    ALL_TABLES.iter().map(|t| t.name).collect()
}
