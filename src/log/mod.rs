//! Leveled logging to a per-process file, fed through a bounded queue so
//! boundary calls never wait on disk I/O.
pub mod log_level;
pub mod log_macros;
pub mod log_msg;
pub mod log_sink;
pub mod logger;
pub mod logger_handle;
pub mod noop_log_sink;
pub use noop_log_sink::NoopLogSink;
