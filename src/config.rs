/// Cell value the dataset uses for "unknown"
pub const NA: &str = "NA";

/// Year of the unofficial 1906 Intercalated Games, excluded from all statistics
pub const UNOFFICIAL_GAME_YEAR: i32 = 1906;

/// Default output database, relative to the working directory
pub const DEFAULT_DB_FILE: &str = "olympic_history.db";

/// Rows per prepared-statement batch when loading a table
pub const BATCH_SIZE: usize = 1000;

/// Width of the longest bar in a chart, in blocks
pub const MAX_BAR_LENGTH: usize = 200;

/// Glyph used to draw chart bars
pub const BLOCK: char = '█';

/// Default number of teams shown by the `top-teams` chart
pub const DEFAULT_TOP_TEAMS: usize = 10;

/// Columns the input header must contain
pub const REQUIRED_COLUMNS: &[&str] = &[
    "ID", "Name", "Sex", "Age", "Height", "Weight", "Team", "NOC", "Games", "Year", "Season",
    "City", "Sport", "Event", "Medal",
];
