//! Scripted fakes for driving a [`Session`] without a camera or cascade file.
#![allow(clippy::unwrap_used, clippy::expect_used)]

use std::{
    collections::VecDeque,
    path::Path,
    sync::{Arc, Mutex},
};

use opencv::{
    core::{CV_8UC3, Mat, Rect, Scalar, Size, Vector},
    prelude::*,
};

use crate::{
    camera_manager::{CameraError, FrameSource},
    detection::{DetectionError, DetectionParams, FaceDetector},
    log::{NoopLogSink, log_sink::LogSink},
    session::{CaptureBackend, Session, SessionConfig},
};

pub const W: i32 = 64;
pub const H: i32 = 48;

/// A `W`x`H` BGR frame filled with (10, 20, 30).
pub fn bgr_frame() -> Mat {
    Mat::new_rows_cols_with_default(H, W, CV_8UC3, Scalar::new(10.0, 20.0, 30.0, 0.0)).unwrap()
}

/// Shared record of what the fakes saw and what they should produce.
///
/// Once `frames` runs dry the source yields empty frames.
#[derive(Default)]
pub struct Script {
    pub frames: Mutex<VecDeque<Mat>>,
    pub faces: Mutex<Vec<Rect>>,
    pub gray_sizes: Mutex<Vec<Size>>,
    pub releases: Mutex<usize>,
    pub fail_classifier: bool,
    pub fail_device: bool,
}

pub struct FakeSource(Arc<Script>);

impl FrameSource for FakeSource {
    fn frame_size(&self) -> (i32, i32) {
        (W, H)
    }

    fn read_into(&mut self, frame: &mut Mat) -> Result<(), CameraError> {
        match self.0.frames.lock().unwrap().pop_front() {
            Some(next) => next.copy_to(frame)?,
            None => *frame = Mat::default(),
        }
        Ok(())
    }

    fn release(&mut self) {
        *self.0.releases.lock().unwrap() += 1;
    }
}

pub struct FakeDetector(Arc<Script>);

impl FaceDetector for FakeDetector {
    fn detect(
        &mut self,
        gray: &Mat,
        _params: &DetectionParams,
        faces: &mut Vector<Rect>,
    ) -> opencv::Result<()> {
        self.0
            .gray_sizes
            .lock()
            .unwrap()
            .push(Size::new(gray.cols(), gray.rows()));
        for r in self.0.faces.lock().unwrap().iter() {
            faces.push(*r);
        }
        Ok(())
    }
}

pub struct FakeBackend(Arc<Script>);

impl CaptureBackend for FakeBackend {
    fn load_detector(&self, path: &Path) -> Result<Box<dyn FaceDetector>, DetectionError> {
        if self.0.fail_classifier {
            return Err(DetectionError::ClassifierLoad {
                path: path.to_path_buf(),
                reason: "file not found".into(),
            });
        }
        Ok(Box::new(FakeDetector(Arc::clone(&self.0))))
    }

    fn open_source(
        &self,
        device_index: i32,
        _logger: Arc<dyn LogSink>,
    ) -> Result<Box<dyn FrameSource>, CameraError> {
        if self.0.fail_device {
            return Err(CameraError::OpenFailed(device_index));
        }
        Ok(Box::new(FakeSource(Arc::clone(&self.0))))
    }
}

/// A closed session over `script`, with the default config and no logging.
pub fn session_with(script: Script) -> (Session, Arc<Script>) {
    let script = Arc::new(script);
    let session = Session::with_backend(
        SessionConfig::default(),
        Box::new(FakeBackend(Arc::clone(&script))),
        Arc::new(NoopLogSink),
    );
    (session, script)
}

/// `frames` copies of [`bgr_frame`], each reporting `faces`.
pub fn script_with(frames: usize, faces: Vec<Rect>) -> Script {
    Script {
        frames: Mutex::new((0..frames).map(|_| bgr_frame()).collect()),
        faces: Mutex::new(faces),
        ..Script::default()
    }
}

pub fn three_faces() -> Vec<Rect> {
    vec![
        Rect::new(2, 2, 10, 10),
        Rect::new(20, 4, 8, 8),
        Rect::new(40, 10, 12, 12),
    ]
}
