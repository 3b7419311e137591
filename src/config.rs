// src/config.rs

use anyhow::{bail, Result};
use clap::{ArgAction, Parser};
use std::ffi::OsString;
use std::path::{Path, PathBuf};

/// Long flags that are also accepted with a single leading dash (`-header`, `-tbl`).
const SINGLE_DASH_LONG_FLAGS: &[&str] = &["header", "tbl"];

#[derive(Parser, Debug)]
#[command(name = "tab2sqlite")]
#[command(about = "Convert a tab-delimited file into a table in a SQLite database")]
pub struct Args {
    /// Tab-delimited input file
    pub input: PathBuf,

    /// Output database file (default: <input-stem>.sqlite)
    #[arg(short = 'o')]
    pub output: Option<PathBuf>,

    /// First line of the input is a header holding column names
    #[arg(
        long,
        num_args = 0..=1,
        require_equals = true,
        default_value_t = false,
        default_missing_value = "true",
        action = ArgAction::Set
    )]
    pub header: bool,

    /// Name of the table to create (default: <input-stem>)
    #[arg(long)]
    pub tbl: Option<String>,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,
}

impl Args {
    /// Parse arguments after rewriting `-header` / `-tbl` to their double-dash form.
    pub fn parse_lenient<I, T>(args: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString>,
    {
        Self::parse_from(expand_single_dash_long_flags(args))
    }
}

/// Rewrite `-header`, `-header=true`, `-tbl name` and `-tbl=name` to `--…`.
/// Everything else passes through untouched.
pub fn expand_single_dash_long_flags<I, T>(args: I) -> Vec<OsString>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    args.into_iter()
        .map(Into::into)
        .map(|arg| {
            let Some(s) = arg.to_str() else {
                return arg;
            };
            if s.starts_with("--") {
                return arg;
            }
            let Some(rest) = s.strip_prefix('-') else {
                return arg;
            };
            let name = rest.split('=').next().unwrap_or(rest);
            if SINGLE_DASH_LONG_FLAGS.contains(&name) {
                OsString::from(format!("-{}", s))
            } else {
                arg
            }
        })
        .collect()
}

/// Immutable run configuration, resolved once from the command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub input: PathBuf,
    pub output: PathBuf,
    pub table: String,
    pub header: bool,
}

impl Config {
    /// Fill in the stem-derived defaults for the output path and table name.
    pub fn new(
        input: impl Into<PathBuf>,
        output: Option<PathBuf>,
        table: Option<String>,
        header: bool,
    ) -> Result<Self> {
        let input = input.into();
        let stem = input_stem(&input)?;
        let output = output.unwrap_or_else(|| PathBuf::from(format!("{}.sqlite", stem)));
        let table = table.unwrap_or(stem);
        Ok(Self {
            input,
            output,
            table,
            header,
        })
    }

    pub fn from_args(args: &Args) -> Result<Self> {
        Self::new(
            args.input.clone(),
            args.output.clone(),
            args.tbl.clone(),
            args.header,
        )
    }
}

/// File name of `input` without its last extension.
fn input_stem(input: &Path) -> Result<String> {
    match input.file_stem() {
        Some(stem) => Ok(stem.to_string_lossy().into_owned()),
        None => bail!("cannot derive a file stem from {:?}", input),
    }
}
