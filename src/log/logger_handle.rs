use std::sync::mpsc;

use crate::log::{log_level::LogLevel, log_msg::LogMsg, log_sink::LogSink};

/// Cloneable producer side of the [`Logger`](super::logger::Logger) queue.
///
/// [`try_log`](Self::try_log) never blocks: when the queue is full the line is
/// dropped and the error is returned to the caller.
#[derive(Clone)]
pub struct LoggerHandle {
    pub(super) tx: mpsc::SyncSender<LogMsg>,
}

impl LogSink for LoggerHandle {
    #[inline]
    fn log(&self, level: LogLevel, msg: &str, target: &'static str) {
        let _ = self.try_log(level, msg, target);
    }
}

impl LoggerHandle {
    /// Enqueues a line stamped with the current time.
    ///
    /// # Errors
    /// - `TrySendError::Full` when the bounded queue is at capacity.
    /// - `TrySendError::Disconnected` when the writer thread is gone.
    pub fn try_log<S: Into<String>>(
        &self,
        level: LogLevel,
        text: S,
        target: &'static str,
    ) -> Result<(), mpsc::TrySendError<LogMsg>> {
        self.tx.try_send(LogMsg::new(level, text, target))
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used, clippy::expect_used)]
    use super::*;
    use std::sync::mpsc::{TrySendError, sync_channel};

    #[test]
    fn try_log_queues_message_with_metadata() {
        let (tx, rx) = sync_channel::<LogMsg>(2);
        let h = LoggerHandle { tx };

        h.try_log(LogLevel::Info, "session opened", "facecap::session")
            .expect("queue has room");

        let msg = rx.recv().expect("a message should arrive");
        assert_eq!(msg.level, LogLevel::Info);
        assert_eq!(msg.text, "session opened");
        assert_eq!(msg.target, "facecap::session");
        assert!(msg.ts_ms > 0);
    }

    #[test]
    fn try_log_reports_full_queue() {
        let (tx, _rx) = sync_channel::<LogMsg>(1);
        let h = LoggerHandle { tx };

        h.try_log(LogLevel::Info, "first", "t").expect("first fits");

        match h.try_log(LogLevel::Info, "second", "t") {
            Err(TrySendError::Full(_)) => {}
            other => panic!("expected Full, got: {other:?}"),
        }
    }

    #[test]
    fn sink_impl_swallows_disconnected_queue() {
        let (tx, rx) = sync_channel::<LogMsg>(1);
        drop(rx);
        let h = LoggerHandle { tx };

        assert!(matches!(
            h.try_log(LogLevel::Error, "nobody listening", "t"),
            Err(TrySendError::Disconnected(_))
        ));
        // Through the trait the failure is silent.
        h.log(LogLevel::Error, "nobody listening", "t");
    }
}
