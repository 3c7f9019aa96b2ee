//! No-operation logger implementation.

use std::fmt::Arguments;

use crate::level::Level;
use crate::log::Log;

/// A logger that discards all messages.
///
/// Stands in for a real logger where a component requires one but output is
/// unwanted, e.g. benchmarks or callers that never configured logging.
///
/// # Example
///
/// ```
/// use lvlog::{Log, NoOpLogger};
/// use std::sync::Arc;
///
/// let logger: Arc<dyn Log> = Arc::new(NoOpLogger);
/// logger.error("This message is discarded");
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct NoOpLogger;

impl Log for NoOpLogger {
    #[inline]
    fn log(&self, _level: Level, _args: Arguments<'_>) {}

    #[inline]
    fn enabled(&self, _level: Level) -> bool {
        false
    }
}
