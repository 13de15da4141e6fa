use std::sync::{Arc, OnceLock};

use crate::{
    config::Config,
    log::{
        log_sink::LogSink,
        logger::{DEFAULT_QUEUE_CAPACITY, Logger},
    },
    session::{Session, SessionConfig},
    sink_info,
};

/// Process-wide state shared by every exported session: resolved config and
/// the file logger. Built on first use.
pub struct Runtime {
    config: SessionConfig,
    logger: Logger,
}

static RUNTIME: OnceLock<Runtime> = OnceLock::new();

/// Returns the runtime, discovering config and starting the logger on the
/// first call.
pub fn runtime() -> &'static Runtime {
    RUNTIME.get_or_init(|| Runtime::from_config(&Config::discover()))
}

impl Runtime {
    #[must_use]
    pub fn from_config(cfg: &Config) -> Self {
        let name = cfg
            .get_non_empty("Logging", "log_filename")
            .or_else(|| cfg.get_global("log_filename").filter(|s| !s.is_empty()));
        let logger = match cfg.get_non_empty("Logging", "log_path") {
            Some(dir) => Logger::start_in_dir(dir, name, DEFAULT_QUEUE_CAPACITY),
            None => Logger::start_default(name),
        };
        let config = SessionConfig::from_config(cfg);

        let sink = logger.handle();
        sink_info!(
            sink,
            "facecap runtime ready: device {}, cascade {}, log {}",
            config.device_index,
            config.cascade_path.display(),
            logger.file_path().display()
        );

        Self { config, logger }
    }

    #[must_use]
    pub fn log_sink(&self) -> Arc<dyn LogSink> {
        Arc::new(self.logger.handle())
    }

    /// A closed session over real devices with the runtime's config and logger.
    #[must_use]
    pub fn new_session(&self) -> Session {
        Session::new(self.config.clone(), self.log_sink())
    }
}
