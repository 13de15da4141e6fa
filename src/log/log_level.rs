use std::fmt;

/// Severity of a log line.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum LogLevel {
    /// Per-frame detail (capture sizes, detection counts).
    Trace,
    /// Session transitions worth seeing while debugging a host integration.
    Debug,
    /// Lifecycle events: init, close, scale changes.
    Info,
    /// Recoverable trouble: lost device, rejected arguments.
    Warn,
    /// Failures surfaced to the host as error codes.
    Error,
}

impl LogLevel {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Trace => "TRACE",
            Self::Debug => "DEBUG",
            Self::Info => "INFO",
            Self::Warn => "WARN",
            Self::Error => "ERROR",
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
