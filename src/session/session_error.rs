use std::fmt;

use opencv::Error as CvError;

use crate::{
    camera_manager::CameraError, detection::DetectionError, interop::FrameError,
};

/// Why `Init` failed.
#[derive(Debug)]
pub enum InitError {
    Classifier(DetectionError),
    Device(CameraError),
}

impl InitError {
    /// Return value of the `Init` export.
    #[must_use]
    pub const fn code(&self) -> i32 {
        match self {
            Self::Classifier(_) => -1,
            Self::Device(_) => -2,
        }
    }
}

impl fmt::Display for InitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Classifier(e) => write!(f, "Init failed loading classifier: {e}"),
            Self::Device(e) => write!(f, "Init failed opening device: {e}"),
        }
    }
}

impl std::error::Error for InitError {}

/// Why a session call did not produce a frame.
#[derive(Debug)]
pub enum SessionError {
    /// No device is open.
    NotOpen,
    /// The device yielded no frame; the session is now closed.
    EmptyCapture,
    /// Color conversion produced nothing.
    EmptyOutput { faces_written: usize },
    /// An image processing step failed.
    OpenCv {
        faces_written: usize,
        error: CvError,
    },
}

impl SessionError {
    /// The [`FrameError`] reported to the host for this failure.
    #[must_use]
    pub const fn frame_error(&self) -> FrameError {
        match self {
            Self::NotOpen => FrameError::NotOpen,
            Self::EmptyCapture => FrameError::EmptyCapture,
            Self::EmptyOutput { .. } | Self::OpenCv { .. } => FrameError::EmptyOutput,
        }
    }

    /// Circles already written to the caller's array before the failure.
    /// `None` when the failure happened before detection ran.
    #[must_use]
    pub const fn faces_written(&self) -> Option<usize> {
        match self {
            Self::EmptyOutput { faces_written } | Self::OpenCv { faces_written, .. } => {
                Some(*faces_written)
            }
            Self::NotOpen | Self::EmptyCapture => None,
        }
    }
}

impl fmt::Display for SessionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotOpen => write!(f, "Capture device not open"),
            Self::EmptyCapture => write!(f, "Captured frame is empty"),
            Self::EmptyOutput { .. } => write!(f, "Converted output frame is empty"),
            Self::OpenCv { error, .. } => write!(f, "OpenCV error: {error}"),
        }
    }
}

impl std::error::Error for SessionError {}

/// A non-positive downscale divisor passed to `SetScale`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScaleError(pub i32);

impl fmt::Display for ScaleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Invalid scale divisor: {}", self.0)
    }
}

impl std::error::Error for ScaleError {}
