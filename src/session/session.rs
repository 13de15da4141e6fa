use std::sync::Arc;

use opencv::{
    core::{AlgorithmHint, Mat, Rect, Vector},
    imgproc,
    prelude::*,
};

use crate::{
    detection::{FaceDetector, Preprocessor},
    interop::Circle,
    log::log_sink::LogSink,
    session::{
        capture_backend::{CaptureBackend, OpenCvBackend},
        frame_view::FrameView,
        session_config::SessionConfig,
        session_error::{InitError, ScaleError, SessionError},
        session_state::SessionState,
    },
    sink_error, sink_info, sink_trace, sink_warn,
};

/// Result of a successful [`Session::detect`].
#[derive(Debug)]
pub struct Detection<'a> {
    /// Annotated RGB frame at capture resolution.
    pub frame: FrameView<'a>,
    /// Number of leading entries of the caller's slice that were filled.
    pub faces_written: usize,
}

/// One capture/detect context: a classifier, at most one open device, the
/// downscale divisor and the buffers reused from frame to frame.
///
/// Not meant for concurrent use; every method takes `&mut self` except the
/// getters.
pub struct Session {
    config: SessionConfig,
    backend: Box<dyn CaptureBackend>,
    logger: Arc<dyn LogSink>,
    detector: Option<Box<dyn FaceDetector>>,
    state: SessionState,
    scale: i32,
    captured: Mat,
    preprocessor: Preprocessor,
    faces: Vector<Rect>,
    output: Mat,
    output_exposed: bool,
}

impl Session {
    /// A closed session over real cameras and cascade files.
    #[must_use]
    pub fn new(config: SessionConfig, logger: Arc<dyn LogSink>) -> Self {
        Self::with_backend(config, Box::new(OpenCvBackend), logger)
    }

    #[must_use]
    pub fn with_backend(
        config: SessionConfig,
        backend: Box<dyn CaptureBackend>,
        logger: Arc<dyn LogSink>,
    ) -> Self {
        let scale = config.initial_scale.max(1);
        Self {
            config,
            backend,
            logger,
            detector: None,
            state: SessionState::Closed,
            scale,
            captured: Mat::default(),
            preprocessor: Preprocessor::new(),
            faces: Vector::new(),
            output: Mat::default(),
            output_exposed: false,
        }
    }

    /// Loads the classifier and opens the configured device, returning its
    /// native `(width, height)`.
    ///
    /// Calling `init` on an open session releases the current device first.
    ///
    /// # Errors
    /// `InitError::Classifier` if the cascade cannot be loaded (no device is
    /// touched), `InitError::Device` if the device does not open.
    pub fn init(&mut self) -> Result<(i32, i32), InitError> {
        let detector = self
            .backend
            .load_detector(&self.config.cascade_path)
            .map_err(|e| {
                sink_error!(self.logger, "{e}");
                InitError::Classifier(e)
            })?;
        self.detector = Some(detector);

        if self.state.close() {
            sink_info!(self.logger, "re-init: previous device released");
        }

        let source = self
            .backend
            .open_source(self.config.device_index, Arc::clone(&self.logger))
            .map_err(|e| {
                sink_error!(self.logger, "{e}");
                InitError::Device(e)
            })?;
        let size = source.frame_size();
        self.state = SessionState::Open(source);

        sink_info!(
            self.logger,
            "session open: device {} at {}x{}, scale {}",
            self.config.device_index,
            size.0,
            size.1,
            self.scale
        );
        Ok(size)
    }

    /// Releases the capture device. Idempotent.
    pub fn close(&mut self) {
        if self.state.close() {
            sink_info!(self.logger, "session closed");
        }
    }

    /// Sets the downscale divisor used before detection.
    ///
    /// # Errors
    /// [`ScaleError`] for zero or negative values; the current divisor is
    /// kept.
    pub fn set_scale(&mut self, scale: i32) -> Result<(), ScaleError> {
        if scale <= 0 {
            sink_warn!(
                self.logger,
                "rejected scale {scale}, keeping {}",
                self.scale
            );
            return Err(ScaleError(scale));
        }
        if scale != self.scale {
            sink_info!(self.logger, "scale {} -> {scale}", self.scale);
        }
        self.scale = scale;
        Ok(())
    }

    #[must_use]
    pub const fn scale(&self) -> i32 {
        self.scale
    }

    #[must_use]
    pub const fn is_open(&self) -> bool {
        self.state.is_open()
    }

    #[must_use]
    pub const fn config(&self) -> &SessionConfig {
        &self.config
    }

    /// The host is done with the last returned frame pointer. The buffer
    /// itself stays allocated for reuse by the next `detect`.
    pub fn free_memory(&mut self) {
        self.output_exposed = false;
    }

    /// Whether a frame pointer has been handed out and not yet released with
    /// [`free_memory`](Self::free_memory).
    #[must_use]
    pub const fn output_exposed(&self) -> bool {
        self.output_exposed
    }

    /// Captures one frame, detects faces and returns the annotated RGB frame.
    ///
    /// At most `out_faces.len()` faces are reported, in detection order;
    /// further detections are dropped.
    ///
    /// # Errors
    /// - `NotOpen` when no device is open. Nothing is written.
    /// - `EmptyCapture` when the device yields nothing. The session moves to
    ///   closed, so the next call reports `NotOpen`.
    /// - `EmptyOutput` / `OpenCv` when processing fails. Circles written
    ///   before the failure are reported through
    ///   [`SessionError::faces_written`].
    pub fn detect(&mut self, out_faces: &mut [Circle]) -> Result<Detection<'_>, SessionError> {
        let read = match &mut self.state {
            SessionState::Closed => return Err(SessionError::NotOpen),
            SessionState::Open(source) => source.read_into(&mut self.captured),
        };
        if let Err(e) = read {
            self.on_capture_lost(&e.to_string());
            return Err(SessionError::EmptyCapture);
        }
        if self.captured.empty() {
            self.on_capture_lost("empty frame");
            return Err(SessionError::EmptyCapture);
        }

        let Some(detector) = self.detector.as_mut() else {
            return Err(SessionError::NotOpen);
        };

        let scale = self.scale;
        let logger = &self.logger;
        let fail = |faces_written: usize| {
            move |error: opencv::Error| {
                sink_error!(logger, "detect failed: {error}");
                SessionError::OpenCv {
                    faces_written,
                    error,
                }
            }
        };

        let gray = self.preprocessor.run(&self.captured, scale).map_err(fail(0))?;
        self.faces.clear();
        detector
            .detect(gray, &self.config.detection, &mut self.faces)
            .map_err(fail(0))?;

        let mut written = 0;
        for (slot, face) in out_faces.iter_mut().zip(self.faces.iter()) {
            self.config
                .annotation
                .draw(&mut self.captured, face, scale)
                .map_err(fail(written))?;
            *slot = Circle::from_detection(face, scale);
            written += 1;
        }
        sink_trace!(
            logger,
            "{} faces detected, {written} reported",
            self.faces.len()
        );

        imgproc::cvt_color(
            &self.captured,
            &mut self.output,
            imgproc::COLOR_BGR2RGB,
            0,
            AlgorithmHint::ALGO_HINT_DEFAULT,
        )
        .map_err(fail(written))?;

        if self.output.empty() {
            sink_error!(logger, "converted frame is empty");
            return Err(SessionError::EmptyOutput {
                faces_written: written,
            });
        }

        let frame = FrameView::from_mat(&self.output).map_err(fail(written))?;
        self.output_exposed = true;
        Ok(Detection {
            frame,
            faces_written: written,
        })
    }

    /// Open -> Closed after the device stops producing frames.
    fn on_capture_lost(&mut self, reason: &str) {
        sink_warn!(self.logger, "capture lost ({reason}), closing session");
        self.state.close();
    }
}

impl Drop for Session {
    fn drop(&mut self) {
        self.state.close();
    }
}
