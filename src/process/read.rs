// src/process/read.rs

use anyhow::{Context, Result};
use std::{fs, path::Path};
use tracing::{debug, instrument, warn};

/// Field separator within a line.
pub const FIELD_DELIMITER: char = '\t';

/// Read the whole file and split it on line feeds.
///
/// No `\r` handling and no trimming: a trailing newline produces a final empty
/// line, which later fails to insert like any other short row.
#[instrument(level = "debug", skip(path), fields(path = %path.as_ref().display()))]
pub fn read_lines<P: AsRef<Path>>(path: P) -> Result<Vec<String>> {
    let bytes = fs::read(&path)
        .with_context(|| format!("Failed to read input file: {:?}", path.as_ref()))?;

    let text = match String::from_utf8(bytes) {
        Ok(s) => s,
        Err(e) => {
            warn!(
                path = %path.as_ref().display(),
                "input is not valid UTF-8; invalid sequences replaced"
            );
            String::from_utf8_lossy(e.as_bytes()).into_owned()
        }
    };

    let lines: Vec<String> = text.split('\n').map(str::to_owned).collect();
    debug!(lines = lines.len(), bytes = text.len(), "read input");
    Ok(lines)
}

/// Split one line into its tab-separated fields. Always yields at least one field.
pub fn split_fields(line: &str) -> Vec<String> {
    line.split(FIELD_DELIMITER).map(str::to_owned).collect()
}

/// The input split into an optional header and the data lines.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TabFile {
    /// Raw header fields, when the first line was declared a header.
    pub header: Option<Vec<String>>,
    /// Data lines, unsplit, in file order.
    pub rows: Vec<String>,
}

impl TabFile {
    pub fn from_lines(mut lines: Vec<String>, has_header: bool) -> Self {
        let header = if has_header && !lines.is_empty() {
            Some(split_fields(&lines.remove(0)))
        } else {
            None
        };
        Self {
            header,
            rows: lines,
        }
    }

    /// Fields of the first data row, the only row used for type inference.
    pub fn first_row_fields(&self) -> Option<Vec<String>> {
        self.rows.first().map(|line| split_fields(line))
    }
}
