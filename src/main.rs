//! P0NG entry point
//!
//! Sets up logging and settings, opens the terminal front end and runs the
//! session loop.

use std::fs::File;
use std::process::ExitCode;

use p0ng::renderer::TerminalFrontend;
use p0ng::{Session, Settings};

/// Environment variable naming a log file. The terminal owns the screen while
/// playing, so logs go there when set.
const LOG_FILE_VAR: &str = "P0NG_LOG";

fn main() -> ExitCode {
    init_logging();
    log::info!("P0NG starting...");

    let settings = Settings::load();
    match run(&settings) {
        Ok(()) => {
            log::info!("P0NG exited");
            ExitCode::SUCCESS
        }
        Err(e) => {
            let report = e.report();
            log::error!("{}", report);
            eprintln!("p0ng: {report}");
            ExitCode::FAILURE
        }
    }
}

fn run(settings: &Settings) -> p0ng::Result<()> {
    // Dropped before main reports an error, restoring the terminal
    let mut frontend = TerminalFrontend::new()?;
    let mut session = Session::new(settings);
    session.run(&mut frontend)
}

fn init_logging() {
    let mut builder = env_logger::Builder::from_default_env();

    if let Some(path) = std::env::var_os(LOG_FILE_VAR) {
        match File::create(&path) {
            Ok(file) => {
                if std::env::var_os(env_logger::DEFAULT_FILTER_ENV).is_none() {
                    builder.filter_level(log::LevelFilter::Info);
                }
                builder.target(env_logger::Target::Pipe(Box::new(file)));
            }
            Err(e) => eprintln!("p0ng: cannot open log file {}: {e}", path.to_string_lossy()),
        }
    }

    builder.init();
}
