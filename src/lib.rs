//! Load a tab-delimited text file into a single SQLite table.
//!
//! The pipeline reads the whole file into memory, infers one storage kind per
//! column from the first data row only, then inserts every row inside a single
//! transaction. Rows that fail to insert are logged and reported back in a
//! [`process::LoadReport`]; they never abort the load.
//!
//! Mixed-type columns are a known limitation: a column typed `REAL` from its
//! first row keeps that declaration even if later rows hold text.

pub mod config;
pub mod process;
pub mod sqlite;

pub use config::Config;
pub use process::{run, LoadReport, SkippedRow};

#[cfg(test)]
pub(crate) fn init_test_logging() {
    use tracing_subscriber::{EnvFilter, FmtSubscriber};

    let subscriber = FmtSubscriber::builder()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info,tab2sqlite=debug")),
        )
        .with_test_writer()
        .finish();
    let _ = tracing::subscriber::set_global_default(subscriber);
}
