use std::path::PathBuf;

use crate::{
    config::Config,
    detection::{AnnotationStyle, DetectionParams},
};

pub const DEFAULT_CASCADE_PATH: &str = "lbpcascade_frontalface.xml";

/// Everything a [`Session`](super::Session) needs that the host does not pass in.
#[derive(Debug, Clone, PartialEq)]
pub struct SessionConfig {
    pub device_index: i32,
    /// Relative paths resolve against the host's working directory.
    pub cascade_path: PathBuf,
    /// Downscale divisor in effect until the host calls `SetScale`.
    pub initial_scale: i32,
    pub detection: DetectionParams,
    pub annotation: AnnotationStyle,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            device_index: 0,
            cascade_path: PathBuf::from(DEFAULT_CASCADE_PATH),
            initial_scale: 1,
            detection: DetectionParams::default(),
            annotation: AnnotationStyle::default(),
        }
    }
}

impl SessionConfig {
    #[must_use]
    pub fn from_config(cfg: &Config) -> Self {
        let defaults = Self::default();
        let initial_scale = cfg.get_parsed_or("Detection", "scale", defaults.initial_scale);
        Self {
            device_index: cfg.get_parsed_or("Capture", "device_index", defaults.device_index),
            cascade_path: cfg
                .get_non_empty("Detection", "cascade_path")
                .map_or(defaults.cascade_path, PathBuf::from),
            initial_scale: if initial_scale > 0 {
                initial_scale
            } else {
                defaults.initial_scale
            },
            detection: DetectionParams::from_config(cfg),
            annotation: AnnotationStyle::from_config(cfg),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_stock_setup() {
        let c = SessionConfig::from_config(&Config::empty());
        assert_eq!(c.device_index, 0);
        assert_eq!(c.cascade_path, PathBuf::from("lbpcascade_frontalface.xml"));
        assert_eq!(c.initial_scale, 1);
        assert!(c.annotation.enabled);
    }

    #[test]
    fn reads_capture_and_detection_sections() {
        let cfg = Config::parse(
            "[Capture]\ndevice_index = 2\n[Detection]\ncascade_path = cascades/face.xml\nscale = 0\n",
        );
        let c = SessionConfig::from_config(&cfg);
        assert_eq!(c.device_index, 2);
        assert_eq!(c.cascade_path, PathBuf::from("cascades/face.xml"));
        assert_eq!(c.initial_scale, 1, "non-positive scale keeps the default");
    }
}
