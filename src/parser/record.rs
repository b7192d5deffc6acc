use anyhow::{bail, Context, Result};
use serde::de::{self, Deserializer};
use serde::Deserialize;
use std::fmt::Display;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;
use std::str::FromStr;
use tracing::info;

use crate::config::{NA, REQUIRED_COLUMNS};
use crate::model::Season;

/// One participation row of the athlete-events dataset, bound by header name.
/// `NA` and empty cells become `None` on the optional fields.
#[derive(Debug, Clone, Deserialize)]
pub struct RawRow {
    #[serde(rename = "ID")]
    pub source_id: String,
    #[serde(rename = "Name")]
    pub name: String,
    #[serde(rename = "Sex", deserialize_with = "na_text")]
    pub sex: Option<String>,
    #[serde(rename = "Age", deserialize_with = "na_number")]
    pub age: Option<i32>,
    #[serde(rename = "Height", deserialize_with = "na_number")]
    pub height: Option<f64>,
    #[serde(rename = "Weight", deserialize_with = "na_number")]
    pub weight: Option<f64>,
    #[serde(rename = "Team")]
    pub team: String,
    #[serde(rename = "NOC", deserialize_with = "na_text")]
    pub noc: Option<String>,
    #[serde(rename = "Games")]
    pub games: String,
    #[serde(rename = "Year", deserialize_with = "na_number")]
    pub year: Option<i32>,
    #[serde(rename = "Season", deserialize_with = "season")]
    pub season: Season,
    #[serde(rename = "City")]
    pub city: String,
    #[serde(rename = "Sport")]
    pub sport: String,
    #[serde(rename = "Event")]
    pub event: String,
    #[serde(rename = "Medal", deserialize_with = "na_text")]
    pub medal: Option<String>,
}

fn present(raw: &str) -> Option<&str> {
    let trimmed = raw.trim();
    if trimmed.is_empty() || trimmed == NA {
        None
    } else {
        Some(trimmed)
    }
}

fn na_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    Ok(present(&raw).map(str::to_string))
}

fn na_number<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: FromStr,
    T::Err: Display,
{
    let raw = String::deserialize(deserializer)?;
    match present(&raw) {
        None => Ok(None),
        Some(value) => value
            .parse()
            .map(Some)
            .map_err(|e| de::Error::custom(format!("invalid number {:?}: {}", value, e))),
    }
}

fn season<'de, D>(deserializer: D) -> Result<Season, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    Season::parse(&raw).ok_or_else(|| de::Error::custom(format!("unknown season {:?}", raw)))
}

/// Fail fast when the header lacks any recognised column
fn check_header(headers: &csv::StringRecord) -> Result<()> {
    let missing: Vec<&str> = REQUIRED_COLUMNS
        .iter()
        .copied()
        .filter(|col| !headers.iter().any(|h| h.trim() == *col))
        .collect();

    if !missing.is_empty() {
        bail!("Input is missing required columns: {}", missing.join(", "));
    }
    Ok(())
}

/// Read every row of a delimited dataset into memory
pub fn read_rows_from<R: Read>(reader: R) -> Result<Vec<RawRow>> {
    let mut csv_reader = csv::Reader::from_reader(reader);
    let headers = csv_reader.headers().context("Failed to read header row")?;
    check_header(headers)?;

    csv_reader
        .deserialize::<RawRow>()
        .enumerate()
        .map(|(idx, row)| row.with_context(|| format!("Malformed data row {}", idx + 1)))
        .collect()
}

/// Open and read a dataset file
pub fn read_rows(path: &Path) -> Result<Vec<RawRow>> {
    let file = File::open(path).with_context(|| format!("Failed to open: {:?}", path))?;
    let rows = read_rows_from(BufReader::new(file))
        .with_context(|| format!("Failed to read dataset {:?}", path))?;
    info!(rows = rows.len(), "Read dataset {:?}", path);
    Ok(rows)
}

#[cfg(test)]
mod tests {
    use super::*;

    const HEADER: &str = "ID,Name,Sex,Age,Height,Weight,Team,NOC,Games,Year,Season,City,Sport,Event,Medal";

    fn parse(body: &str) -> Result<Vec<RawRow>> {
        read_rows_from(format!("{}\n{}", HEADER, body).as_bytes())
    }

    #[test]
    fn test_na_cells_become_none() {
        let rows = parse(
            "1,\"A Dijiang\",M,24,NA,80,China,CHN,1992 Summer,1992,Summer,Barcelona,Basketball,Basketball Men's Basketball,NA\n",
        )
        .unwrap();
        let row = &rows[0];
        assert_eq!(row.name, "A Dijiang");
        assert_eq!(row.sex.as_deref(), Some("M"));
        assert_eq!(row.age, Some(24));
        assert_eq!(row.height, None);
        assert_eq!(row.weight, Some(80.0));
        assert_eq!(row.noc.as_deref(), Some("CHN"));
        assert_eq!(row.season, Season::Summer);
        assert_eq!(row.medal, None);
    }

    #[test]
    fn test_na_year_is_not_fatal() {
        let rows = parse(
            "2,\"A Lamusi\",M,23,170,60,China,CHN,2012 Summer,NA,Summer,London,Judo,\"Judo Men's Extra-Lightweight\",NA\n",
        )
        .unwrap();
        assert_eq!(rows[0].year, None);
        assert_eq!(rows[0].age, Some(23));
    }

    #[test]
    fn test_quoted_cells_keep_commas() {
        let rows = parse(
            "5,\"Christine Jacoba Aaftink\",F,21,185,82,Netherlands,NED,1988 Winter,1988,Winter,Calgary,Speed Skating,\"Speed Skating Women's 500 metres\",NA\n",
        )
        .unwrap();
        assert_eq!(rows[0].season, Season::Winter);
        assert_eq!(rows[0].height, Some(185.0));
    }

    #[test]
    fn test_missing_column_fails_fast() {
        let err = read_rows_from("ID,Name,Sex\n1,A,M\n".as_bytes()).unwrap_err();
        let msg = format!("{:#}", err);
        assert!(msg.contains("missing required columns"));
        assert!(msg.contains("NOC"));
        assert!(msg.contains("Medal"));
    }

    #[test]
    fn test_bad_age_is_fatal() {
        let err = parse(
            "1,A,M,old,NA,NA,China,CHN,1992 Summer,1992,Summer,Barcelona,Judo,Judo Men's,NA\n",
        )
        .unwrap_err();
        assert!(format!("{:#}", err).contains("row 1"));
    }

    #[test]
    fn test_unknown_season_is_fatal() {
        let result = parse(
            "1,A,M,20,NA,NA,China,CHN,1992 Spring,1992,Spring,Barcelona,Judo,Judo Men's,NA\n",
        );
        assert!(result.is_err());
    }
}
