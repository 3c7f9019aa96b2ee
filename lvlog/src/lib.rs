//! lvlog - minimal leveled logging
//!
//! Formats log lines and writes them to a sink, gated by a severity
//! threshold. Lines look like:
//!
//! ```text
//! 2025-01-02T15:04:05.999-07:00 [WARN]  disk almost full
//! ```
//!
//! # Quick start
//!
//! ```
//! use lvlog::{log_error, Log, Logger};
//!
//! // Threshold from the LOG environment variable, output to stderr.
//! let logger = Logger::from_env();
//!
//! logger.debug("This is a debug message");
//! logger.warn("This is a warning");
//! log_error!(logger, "This is an error: {}", "some error");
//! ```
//!
//! For tests or custom wiring, build a [`Logger`] over any [`Sink`]:
//!
//! ```
//! use lvlog::{BufferSink, Level, Log, Logger};
//!
//! let sink = BufferSink::new();
//! let logger = Logger::new(sink.clone(), Level::Info);
//! logger.info("captured");
//! assert!(sink.contents().contains("[INFO]  captured"));
//! ```

pub mod format;
pub mod global;
pub mod level;
pub mod log;
pub mod logger;
pub mod sink;

pub use level::{Level, ParseLevelError, ENV_VAR};
pub use log::{Log, NoOpLogger};
pub use logger::Logger;
pub use sink::{BufferSink, Sink};

/// Version of the lvlog library.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
