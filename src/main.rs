use std::io;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use payroll_tracker::config::ConfigLoader;
use payroll_tracker::error::PayrollResult;
use payroll_tracker::session::{Session, SessionEnd};
use payroll_tracker::telemetry;
use tracing::info;

#[derive(Parser, Debug)]
#[command(
    name = "payroll-tracker",
    about = "Register employees and print a payroll report",
    version
)]
struct Cli {
    /// YAML configuration file
    #[arg(long)]
    config: Option<PathBuf>,
    /// Log filter, e.g. "info" or "payroll_tracker=debug" (overrides the config file)
    #[arg(long)]
    log_level: Option<String>,
}

fn run(cli: Cli) -> PayrollResult<SessionEnd> {
    let mut config = ConfigLoader::load_or_default(cli.config.as_ref())?;
    if let Some(level) = cli.log_level {
        config.telemetry.log_level = level;
    }
    telemetry::init(&config.telemetry)?;

    let stdin = io::stdin();
    let mut session = Session::new(stdin.lock(), io::stdout());
    let end = session.run()?;
    info!(?end, employees = session.roster().len(), "Exiting");
    Ok(end)
}

fn main() -> ExitCode {
    match run(Cli::parse()) {
        Ok(_) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("application error: {err}");
            ExitCode::FAILURE
        }
    }
}
