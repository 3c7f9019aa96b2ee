//! Severity levels and threshold parsing.
//!
//! Levels are ordered from most severe to most verbose. A logger admits a
//! message when the message's level is numerically at or below the logger's
//! threshold, so raising the threshold makes the output chattier.

use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Environment variable that selects the threshold.
pub const ENV_VAR: &str = "LOG";

/// Error returned when a string does not name a known level.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown log level '{0}' (expected one of: none, error, warn, warning, info, debug, trace)")]
pub struct ParseLevelError(pub String);

/// Log severity.
///
/// The discriminants are the numeric thresholds used for gating.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[repr(i32)]
pub enum Level {
    /// Logging disabled
    None = -1,
    /// Error messages only
    #[default]
    Error = 0,
    /// Warnings and errors
    Warn = 1,
    /// General information
    Info = 2,
    /// Debugging information
    Debug = 3,
    /// Verbose tracing
    Trace = 4,
}

impl Level {
    /// All levels that can carry a message, most severe first.
    pub const MESSAGE_LEVELS: [Level; 5] = [
        Level::Error,
        Level::Warn,
        Level::Info,
        Level::Debug,
        Level::Trace,
    ];

    /// Numeric threshold value.
    pub const fn as_i32(self) -> i32 {
        self as i32
    }

    /// Map a numeric value back to a level, if it names one exactly.
    pub const fn from_i32(value: i32) -> Option<Level> {
        match value {
            -1 => Some(Level::None),
            0 => Some(Level::Error),
            1 => Some(Level::Warn),
            2 => Some(Level::Info),
            3 => Some(Level::Debug),
            4 => Some(Level::Trace),
            _ => None,
        }
    }

    /// Uppercase tag printed between brackets in a log line.
    pub const fn tag(self) -> &'static str {
        match self {
            Level::None => "NONE",
            Level::Error => "ERROR",
            Level::Warn => "WARN",
            Level::Info => "INFO",
            Level::Debug => "DEBUG",
            Level::Trace => "TRACE",
        }
    }

    /// Threshold selected by the `LOG` environment variable.
    ///
    /// A missing or non-UTF-8 value counts as unrecognized.
    pub fn from_env() -> Level {
        let value = std::env::var(ENV_VAR).ok();
        Level::from_env_value(value.as_deref())
    }

    /// Resolve the value of the `LOG` environment variable to a threshold.
    ///
    /// Unset, empty and unrecognized values all fall back to [`Level::Error`].
    /// This never fails.
    pub fn from_env_value(value: Option<&str>) -> Level {
        value
            .and_then(|v| v.parse::<Level>().ok())
            .unwrap_or_default()
    }
}

impl From<Level> for i32 {
    fn from(level: Level) -> i32 {
        level.as_i32()
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

impl FromStr for Level {
    type Err = ParseLevelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "none" => Ok(Level::None),
            "error" => Ok(Level::Error),
            "warn" | "warning" => Ok(Level::Warn),
            "info" => Ok(Level::Info),
            "debug" => Ok(Level::Debug),
            "trace" => Ok(Level::Trace),
            _ => Err(ParseLevelError(s.to_string())),
        }
    }
}
