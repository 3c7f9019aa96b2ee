//! lvlog demo - command-line consumer of the lvlog library
//!
//! Emits one message per level so the effect of the threshold can be seen.
//! The threshold comes from the `LOG` environment variable unless `--level`
//! overrides it.

mod error;

use clap::Parser;
use std::fs::OpenOptions;
use std::io;

use lvlog::{log_error, log_info, Level, Log, Logger, Sink};
use parking_lot::Mutex;

use crate::error::CliError;

type DynSink = Box<dyn Sink + Send + Sync>;

#[derive(Parser)]
#[command(name = "lvlog-demo")]
#[command(about = "Emit sample log lines at every level", long_about = None)]
#[command(version = lvlog::VERSION)]
struct Args {
    /// Threshold (none, error, warn, info, debug, trace); overrides LOG
    #[arg(long)]
    level: Option<Level>,

    /// Write to stdout instead of stderr
    #[arg(long, conflicts_with = "output")]
    stdout: bool,

    /// Append to this file instead of stderr
    #[arg(long)]
    output: Option<String>,
}

fn main() {
    let args = Args::parse();

    let sink = match open_sink(&args) {
        Ok(sink) => sink,
        Err(e) => e.exit(),
    };
    let level = args.level.unwrap_or_else(Level::from_env);
    let logger = Logger::new(sink, level);

    run(&logger);
}

fn open_sink(args: &Args) -> Result<DynSink, CliError> {
    if let Some(path) = &args.output {
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .map_err(|error| CliError::OutputOpen {
                path: path.clone(),
                error,
            })?;
        return Ok(Box::new(Mutex::new(file)));
    }

    if args.stdout {
        Ok(Box::new(io::stdout()))
    } else {
        Ok(Box::new(io::stderr()))
    }
}

fn run(logger: &dyn Log) {
    logger.trace("This is a trace message");
    logger.debug("This is a debug message");
    log_info!(logger, "This is an info message at threshold {:?}", level_name(logger));
    logger.warn("This is a warning");
    log_error!(
        logger,
        "This is an error: {}",
        io::Error::other("some error")
    );
}

fn level_name(logger: &dyn Log) -> Level {
    Level::MESSAGE_LEVELS
        .into_iter()
        .rev()
        .find(|level| logger.enabled(*level))
        .unwrap_or(Level::None)
}
