use anyhow::{anyhow, Context, Result};
use rusqlite::Connection;
use std::path::Path;
use tracing::info;

use super::schema_gen::{generate_create_table, generate_indexes, generate_insert};
use super::value::{table_rows, SqlRow};
use crate::config::BATCH_SIZE;
use crate::normalize::Dataset;
use crate::schema::{DependencyResolver, TableSchema};
use crate::ui::{Phase, Ui};

/// Row counts written by one load run
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LoadSummary {
    pub tables: Vec<(&'static str, u64)>,
    /// Result rows dropped because their game is excluded or unknown
    pub dropped_results: usize,
}

impl LoadSummary {
    pub fn total_rows(&self) -> u64 {
        self.tables.iter().map(|(_, count)| count).sum()
    }

    pub fn rows_in(&self, table: &str) -> Option<u64> {
        self.tables
            .iter()
            .find(|(name, _)| *name == table)
            .map(|(_, count)| *count)
    }
}

pub struct SqliteWriter {
    conn: Connection,
}

impl SqliteWriter {
    /// Create a fresh database, replacing any existing file
    pub fn new(db_path: &Path) -> Result<Self> {
        if db_path.exists() {
            std::fs::remove_file(db_path)
                .context("Failed to remove existing database")?;
        }

        let conn = Connection::open(db_path)
            .context("Failed to create database")?;

        conn.execute_batch(
            "PRAGMA foreign_keys = ON;
             PRAGMA journal_mode = WAL;
             PRAGMA synchronous = NORMAL;
             PRAGMA cache_size = -64000;"
        )?;

        Ok(Self { conn })
    }

    /// Create all tables for the given schemas
    pub fn create_tables(&self, schemas: &[&TableSchema]) -> Result<()> {
        for schema in schemas {
            let sql = generate_create_table(schema);
            self.conn.execute(&sql, [])
                .with_context(|| format!("Failed to create table: {}", schema.name))?;

            for index_sql in generate_indexes(schema) {
                self.conn.execute(&index_sql, [])
                    .with_context(|| format!("Failed to create index for: {}", schema.name))?;
            }
        }

        Ok(())
    }

    /// Insert all rows of one table inside a single transaction.
    ///
    /// A failure rolls back this table only; tables committed earlier in the
    /// run stay in the file.
    pub fn import_table(
        &mut self,
        schema: &TableSchema,
        rows: &[SqlRow],
        ui: &mut impl Ui,
    ) -> Result<u64> {
        let insert_sql = generate_insert(schema);
        let total = rows.len() as u64;
        let mut count: u64 = 0;

        let tx = self.conn.transaction()?;

        for batch in rows.chunks(BATCH_SIZE) {
            insert_batch(&tx, &insert_sql, batch)
                .with_context(|| format!("Failed to insert into {}", schema.name))?;
            count += batch.len() as u64;
            ui.set_progress(count, total, schema.name);
        }

        tx.commit()
            .with_context(|| format!("Failed to commit {}", schema.name))?;

        ui.table_loaded(schema.name, count);
        info!(table = schema.name, rows = count, "Loaded table");

        Ok(count)
    }

    /// Leave a self-contained file that read-only clients can open
    pub fn finalize(self) -> Result<()> {
        self.conn.execute_batch(
            "PRAGMA optimize;
             PRAGMA journal_mode = DELETE;"
        )?;
        Ok(())
    }
}

/// Insert a batch of rows into the database
fn insert_batch(tx: &rusqlite::Transaction, sql: &str, batch: &[SqlRow]) -> Result<()> {
    let mut stmt = tx.prepare_cached(sql)?;

    for row in batch {
        for (idx, value) in row.iter().enumerate() {
            value.bind_to(idx + 1, &mut stmt)?;
        }
        stmt.raw_execute()?;
    }

    Ok(())
}

/// Write every entity set to a new database, parents before children
pub fn load_dataset(dataset: &Dataset, output_db: &Path, ui: &mut impl Ui) -> Result<LoadSummary> {
    let tables = DependencyResolver::new()
        .load_order()
        .map_err(|e| anyhow!(e))?;

    let mut writer = SqliteWriter::new(output_db)?;
    writer.create_tables(&tables)?;

    ui.set_phase(Phase::Loading);
    let mut summary = LoadSummary {
        dropped_results: dataset.results.dropped,
        ..Default::default()
    };

    for schema in &tables {
        let rows = table_rows(dataset, schema.kind)?;
        let count = writer.import_table(schema, &rows, ui)?;
        summary.tables.push((schema.name, count));
    }

    ui.clear_progress();
    writer.finalize()?;

    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::TEAMS;
    use crate::ui::SilentUi;
    use crate::writer::SqlValue;
    use tempfile::TempDir;

    fn team(id: i64, noc: &str) -> SqlRow {
        vec![
            SqlValue::Integer(id),
            SqlValue::Text(format!("Team {}", noc)),
            SqlValue::Text(noc.to_string()),
        ]
    }

    #[test]
    fn test_duplicate_noc_is_fatal() {
        let dir = TempDir::new().unwrap();
        let mut writer = SqliteWriter::new(&dir.path().join("t.db")).unwrap();
        writer.create_tables(&[&TEAMS]).unwrap();

        let rows = vec![team(0, "USA"), team(1, "USA")];
        let err = writer.import_table(&TEAMS, &rows, &mut SilentUi).unwrap_err();
        assert!(format!("{:#}", err).contains("Failed to insert into teams"));
    }

    #[test]
    fn test_failed_table_rolls_back() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("t.db");
        let mut writer = SqliteWriter::new(&path).unwrap();
        writer.create_tables(&[&TEAMS]).unwrap();

        let rows = vec![team(0, "USA"), team(1, "FRA"), team(1, "GBR")];
        assert!(writer.import_table(&TEAMS, &rows, &mut SilentUi).is_err());

        let count: i64 = writer
            .conn
            .query_row("SELECT COUNT(*) FROM teams", [], |r| r.get(0))
            .unwrap();
        assert_eq!(count, 0);
    }

    #[test]
    fn test_existing_file_replaced() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("t.db");
        std::fs::write(&path, b"not a database").unwrap();

        let writer = SqliteWriter::new(&path).unwrap();
        writer.create_tables(&[&TEAMS]).unwrap();
    }
}
