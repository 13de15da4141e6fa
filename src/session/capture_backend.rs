use std::{path::Path, sync::Arc};

use crate::{
    camera_manager::{CameraError, CameraManager, FrameSource},
    detection::{CascadeDetector, DetectionError, FaceDetector},
    log::log_sink::LogSink,
};

/// Opens the devices and classifiers a session runs on.
pub trait CaptureBackend: Send {
    /// # Errors
    /// Any reason the classifier at `path` is unusable.
    fn load_detector(&self, path: &Path) -> Result<Box<dyn FaceDetector>, DetectionError>;

    /// # Errors
    /// Any reason the device at `device_index` cannot be opened.
    fn open_source(
        &self,
        device_index: i32,
        logger: Arc<dyn LogSink>,
    ) -> Result<Box<dyn FrameSource>, CameraError>;
}

/// Cascade classifiers and `VideoCapture` devices.
#[derive(Debug, Default, Clone, Copy)]
pub struct OpenCvBackend;

impl CaptureBackend for OpenCvBackend {
    fn load_detector(&self, path: &Path) -> Result<Box<dyn FaceDetector>, DetectionError> {
        Ok(Box::new(CascadeDetector::load(path)?))
    }

    fn open_source(
        &self,
        device_index: i32,
        logger: Arc<dyn LogSink>,
    ) -> Result<Box<dyn FrameSource>, CameraError> {
        Ok(Box::new(CameraManager::open(device_index, logger)?))
    }
}
