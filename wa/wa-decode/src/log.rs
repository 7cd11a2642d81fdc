//! Leveled diagnostic sinks.
//!
//! Decoding code never consults global state: callers hand a [`LogSink`] to
//! the places that log (see [`Reader`](crate::binary::Reader)).
//! A record at `level` passes a threshold `t` when `t >= level as u8`, so a
//! threshold of 0 silences everything and 5 lets trace through.

use std::fmt;
use std::io::Write;
use std::str::FromStr;

/// Severity of a diagnostic record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Level {
    Error = 1,
    Warn = 2,
    Info = 3,
    Debug = 4,
    Trace = 5,
}

impl Level {
    pub const ALL: [Level; 5] = [Level::Error, Level::Warn, Level::Info, Level::Debug, Level::Trace];

    pub fn as_str(self) -> &'static str {
        match self {
            Level::Error => "error",
            Level::Warn => "warn",
            Level::Info => "info",
            Level::Debug => "debug",
            Level::Trace => "trace",
        }
    }

    /// True if records at this level are written to stderr rather than stdout.
    pub fn is_stderr(self) -> bool {
        matches!(self, Level::Error | Level::Warn)
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown log level: {0}")]
pub struct ParseLevelError(String);

impl FromStr for Level {
    type Err = ParseLevelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Level::ALL
            .into_iter()
            .find(|l| l.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| ParseLevelError(s.to_string()))
    }
}

/// Receiver of pre-formatted diagnostic messages.
pub trait LogSink {
    fn enabled(&self, level: Level) -> bool;

    fn log(&self, level: Level, message: &str);

    /// Format lazily: `args` is rendered only if `level` is enabled.
    fn log_fmt(&self, level: Level, args: fmt::Arguments<'_>) {
        if self.enabled(level) {
            self.log(level, &args.to_string());
        }
    }
}

impl<S: LogSink + ?Sized> LogSink for &S {
    fn enabled(&self, level: Level) -> bool {
        (**self).enabled(level)
    }

    fn log(&self, level: Level, message: &str) {
        (**self).log(level, message)
    }
}

/// Discards every record.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullSink;

impl LogSink for NullSink {
    fn enabled(&self, _level: Level) -> bool {
        false
    }

    fn log(&self, _level: Level, _message: &str) {}
}

/// Threshold-gated sink writing trace/debug/info to stdout and warn/error to stderr.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StdLogger {
    threshold: u8,
}

impl StdLogger {
    pub fn new(threshold: u8) -> Self {
        Self { threshold }
    }

    /// Logger that lets through `level` and everything more severe.
    pub fn with_level(level: Level) -> Self {
        Self::new(level as u8)
    }

    pub fn threshold(&self) -> u8 {
        self.threshold
    }

    pub fn set_threshold(&mut self, threshold: u8) {
        self.threshold = threshold;
    }

    pub fn should_trace(&self) -> bool {
        self.enabled(Level::Trace)
    }
}

impl Default for StdLogger {
    fn default() -> Self {
        Self::new(0)
    }
}

impl LogSink for StdLogger {
    fn enabled(&self, level: Level) -> bool {
        self.threshold >= level as u8
    }

    fn log(&self, level: Level, message: &str) {
        if !self.enabled(level) {
            return;
        }
        let _ = if level.is_stderr() {
            writeln!(std::io::stderr().lock(), "{message}")
        } else {
            writeln!(std::io::stdout().lock(), "{message}")
        };
    }
}

/// Forwards records to the `tracing` macros at the matching level.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl LogSink for TracingSink {
    fn enabled(&self, level: Level) -> bool {
        match level {
            Level::Error => tracing::enabled!(tracing::Level::ERROR),
            Level::Warn => tracing::enabled!(tracing::Level::WARN),
            Level::Info => tracing::enabled!(tracing::Level::INFO),
            Level::Debug => tracing::enabled!(tracing::Level::DEBUG),
            Level::Trace => tracing::enabled!(tracing::Level::TRACE),
        }
    }

    fn log(&self, level: Level, message: &str) {
        match level {
            Level::Error => tracing::error!("{message}"),
            Level::Warn => tracing::warn!("{message}"),
            Level::Info => tracing::info!("{message}"),
            Level::Debug => tracing::debug!("{message}"),
            Level::Trace => tracing::trace!("{message}"),
        }
    }
}
