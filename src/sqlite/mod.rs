use crate::process::convert::convert_fields;
use crate::process::read::split_fields;
use crate::process::schema::Column;
use crate::process::{LoadReport, SkippedRow};
use anyhow::{Context, Result};
use rusqlite::{params_from_iter, Connection};
use std::path::Path;
use tracing::{debug, info, instrument, warn};

/// Open a SQLite database on disk at `path`, creating the file if it doesn't exist.
pub fn open_database<P: AsRef<Path>>(path: P) -> Result<Connection> {
    let conn = Connection::open(&path)
        .with_context(|| format!("Failed to open database: {:?}", path.as_ref()))?;
    Ok(conn)
}

/// Wrap an identifier in double quotes, doubling any embedded quote.
pub fn quote_ident(ident: &str) -> String {
    format!("\"{}\"", ident.replace('"', "\"\""))
}

pub fn create_table_sql(table: &str, columns: &[Column]) -> String {
    let cols: Vec<String> = columns
        .iter()
        .map(|c| format!("{} {}", quote_ident(&c.name), c.kind.sql_type()))
        .collect();
    format!("CREATE TABLE {} ({});", quote_ident(table), cols.join(", "))
}

pub fn insert_sql(table: &str, column_count: usize) -> String {
    let placeholders = vec!["?"; column_count].join(", ");
    format!("INSERT INTO {} VALUES ({});", quote_ident(table), placeholders)
}

/// Create `table`. Fails if it already exists.
pub fn create_table(conn: &Connection, table: &str, columns: &[Column]) -> Result<()> {
    let sql = create_table_sql(table, columns);
    debug!(%sql, "creating table");
    conn.execute(&sql, [])
        .with_context(|| format!("Failed to create table {}", table))?;
    Ok(())
}

/// Insert every row inside one transaction.
///
/// A row that fails to convert or insert is logged, recorded in the report and
/// skipped; the rest of the load carries on. Only begin, prepare and commit
/// failures abort.
pub fn insert_rows(
    conn: &mut Connection,
    table: &str,
    columns: &[Column],
    rows: &[String],
) -> Result<LoadReport> {
    let mut report = LoadReport::new(table, columns);

    let tx = conn
        .transaction()
        .context("Failed to begin transaction")?;
    {
        let sql = insert_sql(table, columns.len());
        let mut stmt = tx
            .prepare(&sql)
            .with_context(|| format!("Failed to prepare insert into {}", table))?;

        for (idx, line) in rows.iter().enumerate() {
            let fields = split_fields(line);
            let outcome = convert_fields(&fields).and_then(|values| {
                stmt.execute(params_from_iter(values.iter()))
                    .map_err(anyhow::Error::from)
            });
            match outcome {
                Ok(_) => report.inserted += 1,
                Err(e) => {
                    warn!(row = idx, error = %format!("{:#}", e), "line skipped");
                    report.skipped.push(SkippedRow {
                        index: idx,
                        reason: format!("{:#}", e),
                    });
                }
            }
        }
    }
    tx.commit().context("Failed to commit transaction")?;
    Ok(report)
}

/// Create the table and fill it from `rows`.
#[instrument(level = "info", skip(conn, columns, rows), fields(columns = columns.len(), rows = rows.len()))]
pub fn load(
    conn: &mut Connection,
    table: &str,
    columns: &[Column],
    rows: &[String],
) -> Result<LoadReport> {
    create_table(conn, table, columns)?;
    let report = insert_rows(conn, table, columns, rows)?;
    info!(
        inserted = report.inserted,
        skipped = report.skipped.len(),
        "load committed"
    );
    Ok(report)
}
