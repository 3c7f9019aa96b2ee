//! The sink-backed logger.

use std::fmt::Arguments;
use std::io::{self, Stderr};

use chrono::Local;

use crate::format::format_line;
use crate::level::Level;
use crate::log::Log;
use crate::sink::Sink;

/// Writes timestamped, tagged lines to a sink when they pass the threshold.
///
/// A message at level `L` is written iff `L <= level`. The threshold is a
/// plain `i32` and is not validated: anything above [`Level::Trace`] admits
/// everything, anything at or below [`Level::None`] admits nothing.
///
/// The logger holds no state besides its two fields and is used through
/// `&self`, so it can be shared read-only once built.
#[derive(Debug, Clone)]
pub struct Logger<S = Stderr> {
    /// Destination for rendered lines.
    pub output: S,
    /// Numeric threshold; see [`Level`] for the named values.
    pub level: i32,
}

impl<S> Logger<S> {
    /// Build a logger over an explicit sink and threshold.
    pub fn new(output: S, level: impl Into<i32>) -> Self {
        Self {
            output,
            level: level.into(),
        }
    }

    /// The threshold as a named level, when it is one.
    pub fn threshold(&self) -> Option<Level> {
        Level::from_i32(self.level)
    }

    /// Borrow the sink.
    pub fn sink(&self) -> &S {
        &self.output
    }
}

impl Logger<Stderr> {
    /// Logger on standard error with the given threshold.
    pub fn stderr(level: impl Into<i32>) -> Self {
        Self::new(io::stderr(), level)
    }

    /// Logger on standard error, threshold taken from the `LOG` variable.
    ///
    /// Recognized values (any case) are `trace`, `debug`, `info`, `warn`,
    /// `warning` and `none`. Anything else, including an unset variable,
    /// leaves the threshold at [`Level::Error`].
    pub fn from_env() -> Self {
        Self::stderr(Level::from_env())
    }

    /// Same as [`Logger::from_env`] over an already looked-up value.
    pub fn from_env_value(value: Option<&str>) -> Self {
        Self::stderr(Level::from_env_value(value))
    }
}

impl Default for Logger<Stderr> {
    fn default() -> Self {
        Self::stderr(Level::Error)
    }
}

impl<S: Sink> Logger<S> {
    fn write(&self, level: Level, message: &str) {
        let line = format_line(&Local::now(), level, message);
        // Write failures are never surfaced to the caller.
        let _ = self.output.write_line(&line);
    }
}

impl<S: Sink + Send + Sync> Log for Logger<S> {
    fn log(&self, level: Level, args: Arguments<'_>) {
        if !self.enabled(level) {
            return;
        }

        match args.as_str() {
            Some(message) => self.write(level, message),
            None => self.write(level, &args.to_string()),
        }
    }

    fn enabled(&self, level: Level) -> bool {
        level != Level::None && level.as_i32() <= self.level
    }
}
