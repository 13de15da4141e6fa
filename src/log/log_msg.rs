use std::time::SystemTime;

use crate::log::log_level::LogLevel;

/// One queued log line, stamped at the call site.
#[derive(Debug, Clone)]
pub struct LogMsg {
    pub level: LogLevel,
    /// Milliseconds since the UNIX epoch.
    pub ts_ms: u128,
    pub text: String,
    /// Module path of the caller.
    pub target: &'static str,
}

impl LogMsg {
    pub fn new(level: LogLevel, text: impl Into<String>, target: &'static str) -> Self {
        Self {
            level,
            ts_ms: now_millis(),
            text: text.into(),
            target,
        }
    }

    /// Renders the line written to the log file.
    #[must_use]
    pub fn render(&self) -> String {
        format!(
            "[{}] {} {} | {}",
            self.level, self.ts_ms, self.target, self.text
        )
    }
}

#[must_use]
pub fn now_millis() -> u128 {
    SystemTime::now()
        .duration_since(SystemTime::UNIX_EPOCH)
        .map(|d| d.as_millis())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used, clippy::expect_used)]
    use super::*;

    #[test]
    fn render_includes_level_target_and_text() {
        let msg = LogMsg::new(LogLevel::Warn, "camera lost", "facecap::session");
        let line = msg.render();
        assert!(line.starts_with("[WARN] "));
        assert!(line.contains("facecap::session"));
        assert!(line.ends_with("| camera lost"));
        assert!(msg.ts_ms > 0);
    }
}
