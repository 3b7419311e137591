// src/process/mod.rs
pub mod convert;
pub mod read;
pub mod schema;
pub mod utils;

use crate::config::Config;
use crate::sqlite;
use anyhow::Result;
use schema::Column;
use tracing::{info, instrument};

/// A data row that could not be inserted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedRow {
    /// 0-based index among the data rows (header excluded).
    pub index: usize,
    pub reason: String,
}

/// Outcome of one load: the schema that was created and what happened to each row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadReport {
    pub table: String,
    pub columns: Vec<Column>,
    pub inserted: usize,
    pub skipped: Vec<SkippedRow>,
}

impl LoadReport {
    pub fn new(table: &str, columns: &[Column]) -> Self {
        Self {
            table: table.to_owned(),
            columns: columns.to_vec(),
            inserted: 0,
            skipped: Vec::new(),
        }
    }

    pub fn skipped_indices(&self) -> Vec<usize> {
        self.skipped.iter().map(|s| s.index).collect()
    }
}

/// Read `config.input`, infer the schema and load it into `config.output`.
///
/// Errors are fatal: unreadable input, unopenable database, failed create or
/// commit. Per-row failures land in the returned report instead.
#[instrument(level = "info", skip(config), fields(input = %config.input.display(), table = %config.table))]
pub fn run(config: &Config) -> Result<LoadReport> {
    let lines = read::read_lines(&config.input)?;
    let tab = read::TabFile::from_lines(lines, config.header);

    let first_row = tab.first_row_fields();
    let columns = schema::infer_columns(tab.header.as_deref(), first_row.as_deref());
    info!(
        columns = columns.len(),
        rows = tab.rows.len(),
        "inferred schema"
    );

    let mut conn = sqlite::open_database(&config.output)?;
    sqlite::load(&mut conn, &config.table, &columns, &tab.rows)
}
