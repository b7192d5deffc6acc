//! Integer code tables for seasons and medals, plus athlete sex

use std::fmt;

/// Olympic season; the integer code is what the `games.season` column stores
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Season {
    Summer,
    Winter,
}

impl Season {
    pub const ALL: [Season; 2] = [Season::Summer, Season::Winter];

    pub fn code(self) -> i64 {
        match self {
            Season::Summer => 0,
            Season::Winter => 1,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Season::Summer => "Summer",
            Season::Winter => "Winter",
        }
    }

    /// Case-insensitive match against "Summer" / "Winter"
    pub fn parse(text: &str) -> Option<Season> {
        Season::ALL
            .into_iter()
            .find(|s| s.label().eq_ignore_ascii_case(text.trim()))
    }
}

impl fmt::Display for Season {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Medal outcome of a participation; `NoMedal` covers `NA` and anything unrecognised
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Medal {
    #[default]
    NoMedal,
    Gold,
    Silver,
    Bronze,
}

impl Medal {
    pub fn code(self) -> i64 {
        match self {
            Medal::NoMedal => 0,
            Medal::Gold => 1,
            Medal::Silver => 2,
            Medal::Bronze => 3,
        }
    }

    /// Map the dataset's Medal cell. Absent or unknown text is `NoMedal`.
    pub fn from_cell(cell: Option<&str>) -> Medal {
        match cell {
            Some("Gold") => Medal::Gold,
            Some("Silver") => Medal::Silver,
            Some("Bronze") => Medal::Bronze,
            _ => Medal::NoMedal,
        }
    }

    /// Case-insensitive chart filter token; `na` selects non-medal rows
    pub fn from_token(token: &str) -> Option<Medal> {
        match token.to_ascii_lowercase().as_str() {
            "gold" => Some(Medal::Gold),
            "silver" => Some(Medal::Silver),
            "bronze" => Some(Medal::Bronze),
            "na" => Some(Medal::NoMedal),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sex {
    Male,
    Female,
}

impl Sex {
    /// Only exact `M` / `F` are recognised
    pub fn from_cell(cell: Option<&str>) -> Option<Sex> {
        match cell {
            Some("M") => Some(Sex::Male),
            Some("F") => Some(Sex::Female),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Sex::Male => "M",
            Sex::Female => "F",
        }
    }
}
