use crate::process::utils::is_number;
use std::fmt;
use tracing::debug;

/// Declared storage kind of a column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColumnKind {
    Text,
    Numeric,
}

impl ColumnKind {
    /// Infer from a single sample value.
    pub fn infer(sample: &str) -> Self {
        if is_number(sample) {
            ColumnKind::Numeric
        } else {
            ColumnKind::Text
        }
    }

    /// SQLite type name used in `CREATE TABLE`. Integers and decimals both map to `REAL`.
    pub fn sql_type(self) -> &'static str {
        match self {
            ColumnKind::Text => "TEXT",
            ColumnKind::Numeric => "REAL",
        }
    }
}

impl fmt::Display for ColumnKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.sql_type())
    }
}

/// A single column of the target table.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Column {
    pub name: String,
    pub kind: ColumnKind,
}

impl Column {
    pub fn new(name: impl Into<String>, kind: ColumnKind) -> Self {
        Self {
            name: name.into(),
            kind,
        }
    }
}

/// Turn a header field into a column name.
///
/// A leading ASCII digit gets an `_` prefix; `-`, `/` and spaces become `_`.
/// Nothing else changes, so the result still needs quoting before it goes
/// into SQL (see [`crate::sqlite::quote_ident`]).
pub fn sanitize(ident: &str) -> String {
    let mut out = String::with_capacity(ident.len() + 1);
    if ident.starts_with(|c: char| c.is_ascii_digit()) {
        out.push('_');
    }
    out.extend(ident.chars().map(|c| match c {
        '-' | '/' | ' ' => '_',
        other => other,
    }));
    out
}

fn positional_name(idx: usize) -> String {
    format!("field{}", idx)
}

/// Build the column list from the optional header and the first data row.
///
/// Names come from the sanitized header, or `field0`, `field1`, … without one.
/// Kinds are decided from `first_row` alone; a column with no sample value is
/// text. With a header the header decides the column count, otherwise the
/// first row does.
pub fn infer_columns(header: Option<&[String]>, first_row: Option<&[String]>) -> Vec<Column> {
    let sample = |idx: usize| first_row.and_then(|row| row.get(idx)).map(String::as_str);

    let names: Vec<String> = match header {
        Some(fields) => fields
            .iter()
            .enumerate()
            .map(|(idx, raw)| {
                if raw.is_empty() {
                    debug!(idx, "empty header field; using positional name");
                    positional_name(idx)
                } else {
                    sanitize(raw)
                }
            })
            .collect(),
        None => (0..first_row.map_or(0, |row| row.len()))
            .map(positional_name)
            .collect(),
    };

    names
        .into_iter()
        .enumerate()
        .map(|(idx, name)| {
            let kind = sample(idx).map_or(ColumnKind::Text, ColumnKind::infer);
            debug!(column = %name, %kind, sample = ?sample(idx), "inferred column");
            Column::new(name, kind)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(v: &[&str]) -> Vec<String> {
        v.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn sanitize_examples() {
        assert_eq!(sanitize("1col"), "_1col");
        assert_eq!(sanitize("a-b c/d"), "a_b_c_d");
        assert_eq!(sanitize("2024-q1 total"), "_2024_q1_total");
    }

    #[test]
    fn sanitize_leaves_valid_names_alone() {
        for name in ["id", "first_name", "Score", "x1", "_9", "naïve", "a.b", "quo\"te"] {
            assert_eq!(sanitize(name), name);
            assert_eq!(sanitize(&sanitize(name)), name);
        }
    }

    #[test]
    fn sanitize_empty_is_empty() {
        assert_eq!(sanitize(""), "");
    }

    #[test]
    fn header_names_and_first_row_types() {
        let header = strings(&["id", "name", "score"]);
        let first = strings(&["1", "Alice", "9.5"]);
        let cols = infer_columns(Some(&header), Some(&first));
        assert_eq!(
            cols,
            vec![
                Column::new("id", ColumnKind::Numeric),
                Column::new("name", ColumnKind::Text),
                Column::new("score", ColumnKind::Numeric),
            ]
        );
    }

    #[test]
    fn positional_names_without_header() {
        let first = strings(&["a", "2", "-3"]);
        let cols = infer_columns(None, Some(&first));
        let names: Vec<&str> = cols.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["field0", "field1", "field2"]);
        let kinds: Vec<ColumnKind> = cols.iter().map(|c| c.kind).collect();
        assert_eq!(
            kinds,
            vec![ColumnKind::Text, ColumnKind::Numeric, ColumnKind::Text]
        );
    }

    #[test]
    fn header_wider_than_first_row_defaults_to_text() {
        let header = strings(&["a", "b", "c"]);
        let first = strings(&["1"]);
        let cols = infer_columns(Some(&header), Some(&first));
        assert_eq!(cols.len(), 3);
        assert_eq!(cols[0].kind, ColumnKind::Numeric);
        assert_eq!(cols[1].kind, ColumnKind::Text);
        assert_eq!(cols[2].kind, ColumnKind::Text);
    }

    #[test]
    fn header_without_data_rows() {
        let header = strings(&["1st", "", "last name"]);
        let cols = infer_columns(Some(&header), None);
        assert_eq!(
            cols,
            vec![
                Column::new("_1st", ColumnKind::Text),
                Column::new("field1", ColumnKind::Text),
                Column::new("last_name", ColumnKind::Text),
            ]
        );
    }

    #[test]
    fn sql_type_names() {
        assert_eq!(ColumnKind::Text.sql_type(), "TEXT");
        assert_eq!(ColumnKind::Numeric.sql_type(), "REAL");
        assert_eq!(ColumnKind::infer("12"), ColumnKind::Numeric);
        assert_eq!(ColumnKind::infer("12a"), ColumnKind::Text);
    }
}
