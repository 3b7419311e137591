use std::process::ExitCode;

use tab2sqlite::config::{Args, Config};
use tracing::{error, info};
use tracing_subscriber::{fmt, EnvFilter};

fn main() -> ExitCode {
    let args = Args::parse_lenient(std::env::args_os());

    // ─── init logging ────────────────────────────────────────────────
    let default_level = if args.verbose { "debug" } else { "info" };
    let env = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    fmt::Subscriber::builder()
        .with_env_filter(env)
        .with_writer(std::io::stderr)
        .with_file(true)
        .with_line_number(true)
        .init();

    match Config::from_args(&args).and_then(|config| {
        info!(
            input = %config.input.display(),
            output = %config.output.display(),
            table = %config.table,
            header = config.header,
            "startup"
        );
        tab2sqlite::run(&config)
    }) {
        Ok(report) => {
            info!(
                table = %report.table,
                inserted = report.inserted,
                skipped = report.skipped.len(),
                "all done"
            );
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("{:#}", e);
            ExitCode::FAILURE
        }
    }
}
