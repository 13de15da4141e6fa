//! `OpenCV` `VideoCapture` backed [`FrameSource`].

use opencv::{
    core::Mat,
    prelude::*,
    videoio::{self, VideoCapture},
};

use std::sync::Arc;

use crate::{
    camera_manager::{camera_error::CameraError, frame_source::FrameSource},
    log::log_sink::LogSink,
    sink_info,
};

/// Owns one capture device from open until release or drop.
pub struct CameraManager {
    cam: Option<VideoCapture>,
    logger: Arc<dyn LogSink>,
    device_index: i32,
    width: i32,
    height: i32,
}

impl CameraManager {
    /// Opens the capture device at `device_index` with any available backend.
    ///
    /// # Errors
    ///
    /// Returns `CameraError::InitializationFailed` if `OpenCV` cannot create
    /// the capture object or query its size, and `CameraError::OpenFailed` if
    /// the device does not open.
    pub fn open(device_index: i32, logger: Arc<dyn LogSink>) -> Result<Self, CameraError> {
        let cam = VideoCapture::new(device_index, videoio::CAP_ANY)
            .map_err(|e| CameraError::InitializationFailed(e.to_string()))?;

        if !cam.is_opened().unwrap_or(false) {
            return Err(CameraError::OpenFailed(device_index));
        }

        let width = cam
            .get(videoio::CAP_PROP_FRAME_WIDTH)
            .map_err(|e| CameraError::InitializationFailed(e.to_string()))?;
        let height = cam
            .get(videoio::CAP_PROP_FRAME_HEIGHT)
            .map_err(|e| CameraError::InitializationFailed(e.to_string()))?;

        #[allow(clippy::cast_possible_truncation)]
        let (width, height) = (width.round() as i32, height.round() as i32);

        sink_info!(
            logger,
            "camera {device_index} opened at {width}x{height}"
        );

        Ok(Self {
            cam: Some(cam),
            logger,
            device_index,
            width,
            height,
        })
    }
}

impl FrameSource for CameraManager {
    fn frame_size(&self) -> (i32, i32) {
        (self.width, self.height)
    }

    fn read_into(&mut self, frame: &mut Mat) -> Result<(), CameraError> {
        let cam = self.cam.as_mut().ok_or(CameraError::CameraOff)?;
        if cam.read(frame)? && !frame.empty() {
            Ok(())
        } else {
            Err(CameraError::NotFrame)
        }
    }

    fn release(&mut self) {
        if let Some(mut cam) = self.cam.take() {
            let _ = cam.release();
            sink_info!(self.logger, "camera {} released", self.device_index);
        }
    }
}

impl Drop for CameraManager {
    fn drop(&mut self) {
        self.release();
    }
}
