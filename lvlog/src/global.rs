//! Process-wide default logger.
//!
//! Prefer passing a [`Log`](crate::Log) to the components that need it. For
//! programs that want one shared logger anyway, install it once at startup
//! with [`init`] (or [`init_from_env`]) before anything calls [`logger`].
//! If nothing was installed, the first [`logger`] call installs a standard
//! error logger at [`Level::Error`].

use std::io::Stderr;
use std::sync::OnceLock;

use thiserror::Error;

use crate::level::Level;
use crate::logger::Logger;

static DEFAULT_LOGGER: OnceLock<Logger<Stderr>> = OnceLock::new();

/// Errors from installing the default logger.
#[derive(Debug, Error)]
pub enum GlobalInitError {
    /// A default logger was already installed (or already used).
    #[error("Default logger already initialized")]
    AlreadyInitialized,
}

/// Install the process-wide default logger.
///
/// # Errors
///
/// Returns [`GlobalInitError::AlreadyInitialized`] when a logger was already
/// installed, either explicitly or by an earlier call to [`logger`].
pub fn init(logger: Logger<Stderr>) -> Result<(), GlobalInitError> {
    DEFAULT_LOGGER
        .set(logger)
        .map_err(|_| GlobalInitError::AlreadyInitialized)
}

/// Install a default logger configured from the `LOG` variable.
pub fn init_from_env() -> Result<(), GlobalInitError> {
    init(Logger::from_env())
}

/// The process-wide default logger.
pub fn logger() -> &'static Logger<Stderr> {
    DEFAULT_LOGGER.get_or_init(|| Logger::stderr(Level::Error))
}

/// Whether a default logger has been installed.
pub fn is_initialized() -> bool {
    DEFAULT_LOGGER.get().is_some()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::log::Log;

    // The default logger is process-wide, so the whole lifecycle is checked
    // in a single test.
    #[test]
    fn test_global_lifecycle() {
        assert!(init(Logger::stderr(Level::None)).is_ok());
        assert!(is_initialized());

        let second = init(Logger::stderr(Level::Trace));
        assert!(matches!(second, Err(GlobalInitError::AlreadyInitialized)));
        assert_eq!(
            second.unwrap_err().to_string(),
            "Default logger already initialized"
        );

        assert_eq!(logger().threshold(), Some(Level::None));
        // Silent at Level::None; exercises the shared path without output.
        logger().error("not written");
    }
}
