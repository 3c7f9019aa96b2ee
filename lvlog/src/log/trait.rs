//! Log trait definition.

use std::fmt::Arguments;
use std::sync::Arc;

use crate::level::Level;

/// Leveled logging interface.
///
/// Components take an `Arc<dyn Log>` (or `&dyn Log`) instead of reaching for
/// a global, so tests can hand them a logger bound to a buffer.
///
/// Each level has a plain method taking a pre-rendered message and a `_fmt`
/// variant taking [`format_args!`] output. Both produce the same line for the
/// same text. The `log_*!` macros wrap the `_fmt` variants.
///
/// Logging never fails: nothing is returned, and write errors are dropped by
/// the implementation.
///
/// # Example
///
/// ```
/// use lvlog::{log_info, BufferSink, Level, Log, Logger};
/// use std::sync::Arc;
///
/// let sink = BufferSink::new();
/// let logger: Arc<dyn Log> = Arc::new(Logger::new(sink.clone(), Level::Info));
///
/// logger.info("Application started");
/// log_info!(logger, "got {} items", 3);
/// logger.debug("not shown");
///
/// assert_eq!(sink.lines().len(), 2);
/// ```
pub trait Log: Send + Sync {
    /// Log a message at the specified level.
    ///
    /// This is the one method implementations must provide; everything else
    /// delegates here.
    fn log(&self, level: Level, args: Arguments<'_>);

    /// Whether a message at `level` would be written.
    fn enabled(&self, level: Level) -> bool;

    fn error(&self, message: &str) {
        self.log(Level::Error, format_args!("{}", message));
    }

    fn error_fmt(&self, args: Arguments<'_>) {
        self.log(Level::Error, args);
    }

    fn warn(&self, message: &str) {
        self.log(Level::Warn, format_args!("{}", message));
    }

    fn warn_fmt(&self, args: Arguments<'_>) {
        self.log(Level::Warn, args);
    }

    fn info(&self, message: &str) {
        self.log(Level::Info, format_args!("{}", message));
    }

    fn info_fmt(&self, args: Arguments<'_>) {
        self.log(Level::Info, args);
    }

    fn debug(&self, message: &str) {
        self.log(Level::Debug, format_args!("{}", message));
    }

    fn debug_fmt(&self, args: Arguments<'_>) {
        self.log(Level::Debug, args);
    }

    fn trace(&self, message: &str) {
        self.log(Level::Trace, format_args!("{}", message));
    }

    fn trace_fmt(&self, args: Arguments<'_>) {
        self.log(Level::Trace, args);
    }
}

impl<T: Log + ?Sized> Log for &T {
    fn log(&self, level: Level, args: Arguments<'_>) {
        (**self).log(level, args)
    }

    fn enabled(&self, level: Level) -> bool {
        (**self).enabled(level)
    }
}

impl<T: Log + ?Sized> Log for Box<T> {
    fn log(&self, level: Level, args: Arguments<'_>) {
        (**self).log(level, args)
    }

    fn enabled(&self, level: Level) -> bool {
        (**self).enabled(level)
    }
}

impl<T: Log + ?Sized> Log for Arc<T> {
    fn log(&self, level: Level, args: Arguments<'_>) {
        (**self).log(level, args)
    }

    fn enabled(&self, level: Level) -> bool {
        (**self).enabled(level)
    }
}

/// Convenience macros for logging with format strings.
#[macro_export]
macro_rules! log_trace {
    ($logger:expr, $($arg:tt)*) => {
        $crate::Log::trace_fmt(&$logger, format_args!($($arg)*))
    };
}

#[macro_export]
macro_rules! log_debug {
    ($logger:expr, $($arg:tt)*) => {
        $crate::Log::debug_fmt(&$logger, format_args!($($arg)*))
    };
}

#[macro_export]
macro_rules! log_info {
    ($logger:expr, $($arg:tt)*) => {
        $crate::Log::info_fmt(&$logger, format_args!($($arg)*))
    };
}

#[macro_export]
macro_rules! log_warn {
    ($logger:expr, $($arg:tt)*) => {
        $crate::Log::warn_fmt(&$logger, format_args!($($arg)*))
    };
}

#[macro_export]
macro_rules! log_error {
    ($logger:expr, $($arg:tt)*) => {
        $crate::Log::error_fmt(&$logger, format_args!($($arg)*))
    };
}
