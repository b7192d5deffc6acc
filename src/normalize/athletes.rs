use anyhow::{Context, Result};

use super::identity::Registry;
use super::teams::Teams;
use crate::model::{Athlete, Parameters, Sex};
use crate::parser::{clean_athlete_name, RawRow};

#[derive(Debug, Clone, PartialEq)]
struct AthleteRecord {
    sex: Option<Sex>,
    year_of_birth: Option<i32>,
    parameters: Parameters,
    team_id: i64,
}

/// Athletes keyed by cleaned name. A repeated name keeps its first id and
/// takes the attributes of the last row seen.
#[derive(Debug, Clone, Default)]
pub struct Athletes {
    by_name: Registry<String, AthleteRecord>,
}

impl Athletes {
    /// Look up by an already cleaned name
    pub fn athlete_id(&self, cleaned_name: &str) -> Option<i64> {
        self.by_name.id_of(cleaned_name)
    }

    pub fn len(&self) -> usize {
        self.by_name.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_name.is_empty()
    }

    pub fn entities(&self) -> Vec<Athlete> {
        self.by_name
            .iter()
            .map(|(id, name, record)| Athlete {
                id,
                name: name.clone(),
                sex: record.sex,
                year_of_birth: record.year_of_birth,
                parameters: record.parameters,
                team_id: record.team_id,
            })
            .collect()
    }
}

/// Every athlete must resolve to a team; `teams` has to be complete already.
pub fn extract_athletes(rows: &[RawRow], teams: &Teams) -> Result<Athletes> {
    let mut by_name: Registry<String, AthleteRecord> = Registry::new();

    for (idx, row) in rows.iter().enumerate() {
        let name = clean_athlete_name(&row.name);
        let noc = row
            .noc
            .as_deref()
            .with_context(|| format!("Athlete {:?} on data row {} has no NOC", name, idx + 1))?;
        let team_id = teams.team_id(noc).with_context(|| {
            format!(
                "Athlete {:?} on data row {} references unknown NOC {}",
                name,
                idx + 1,
                noc
            )
        })?;

        let year_of_birth = match row.year.zip(row.age) {
            Some((year, age)) => Some(year.checked_sub(age).with_context(|| {
                format!(
                    "Malformed data row {}: age {} out of range for year {}",
                    idx + 1,
                    age,
                    year
                )
            })?),
            None => None,
        };

        let record = AthleteRecord {
            sex: Sex::from_cell(row.sex.as_deref()),
            year_of_birth,
            parameters: Parameters {
                height: row.height,
                weight: row.weight,
            },
            team_id,
        };
        by_name.insert_last(name, record);
    }

    Ok(Athletes { by_name })
}
