use std::fs::File;
use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Mutex;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use trip_grouper::domain::{
    DEFAULT_CONNECTION_WINDOW_HOURS, LocationCode, MAX_CONNECTION_WINDOW_HOURS,
};
use trip_grouper::grouping::GroupingConfig;
use trip_grouper::pipeline;
use trip_grouper::report::ReportStyle;

#[derive(Parser)]
#[command(name = "trip-grouper")]
#[command(about = "Group travel reservations into trips", long_about = None)]
struct Cli {
    /// Reservation file to read
    input: PathBuf,

    /// Home location code; trips start and end here
    #[arg(short, long, env = "BASED", default_value = "SVQ")]
    base: LocationCode,

    /// Hours allowed between one segment ending and the next starting
    #[arg(
        long,
        default_value_t = DEFAULT_CONNECTION_WINDOW_HOURS,
        value_parser = clap::value_parser!(i64).range(0..=MAX_CONNECTION_WINDOW_HOURS)
    )]
    window_hours: i64,

    /// Print transport arrivals with their full date
    #[arg(long)]
    full_timestamps: bool,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,

    /// Write logs to this file instead of stderr
    #[arg(long)]
    log_file: Option<PathBuf>,
}

fn init_logging(cli: &Cli) -> Result<(), String> {
    let default_level = if cli.verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    let builder = tracing_subscriber::fmt().with_env_filter(filter);

    match &cli.log_file {
        Some(path) => {
            let file = File::create(path)
                .map_err(|e| format!("Fatal file error: cannot create {}: {e}", path.display()))?;
            builder.with_ansi(false).with_writer(Mutex::new(file)).init();
        }
        None => builder.with_writer(std::io::stderr).init(),
    }

    Ok(())
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    if let Err(message) = init_logging(&cli) {
        eprintln!("{message}");
        return ExitCode::FAILURE;
    }

    let config = match GroupingConfig::new(cli.base).with_window_hours(cli.window_hours) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Data validation error: {e}");
            return ExitCode::FAILURE;
        }
    };
    let style = if cli.full_timestamps {
        ReportStyle::Full
    } else {
        ReportStyle::Compact
    };

    let mut stdout = std::io::stdout().lock();
    match pipeline::run(&cli.input, &config, style, &mut stdout) {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = %e, "Run failed");
            eprintln!("{}", e.diagnostic());
            ExitCode::FAILURE
        }
    }
}
