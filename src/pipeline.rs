use anyhow::Result;
use std::path::Path;

use crate::normalize::Dataset;
use crate::parser::read_rows;
use crate::ui::{Phase, Ui};
use crate::writer::{load_dataset, LoadSummary};

/// Read the dataset, build the entity sets and write them to a new database
pub fn ingest_file(input: &Path, output_db: &Path, ui: &mut impl Ui) -> Result<LoadSummary> {
    ui.set_phase(Phase::Reading);
    ui.set_info(format!("{}", input.display()));
    let rows = read_rows(input)?;
    ui.log(format!("Read {} rows", rows.len()));

    ui.set_phase(Phase::Normalizing);
    let dataset = Dataset::build(&rows)?;
    ui.log(format!(
        "{} teams, {} games, {} sports, {} events, {} athletes",
        dataset.teams.len(),
        dataset.games.len(),
        dataset.sports.len(),
        dataset.events.len(),
        dataset.athletes.len()
    ));
    if dataset.results.dropped > 0 {
        ui.log(format!(
            "Dropped {} results for unofficial or unknown games",
            dataset.results.dropped
        ));
    }

    ui.set_info(format!("{}", output_db.display()));
    let summary = load_dataset(&dataset, output_db, ui)?;
    ui.log(format!("Wrote {} rows", summary.total_rows()));

    Ok(summary)
}
