use crate::log::log_level::LogLevel;

/// Destination for log lines. Implementations must never block the caller
/// for long: the host calls into this library from its frame loop.
pub trait LogSink: Send + Sync {
    fn log(&self, level: LogLevel, msg: &str, target: &'static str);
}
