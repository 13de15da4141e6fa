use opencv::Error as CvError;
use std::fmt;

#[derive(Debug)]
pub enum CameraError {
    InitializationFailed(String),
    OpenFailed(i32),
    OpenCvError(CvError),
    NotFrame,
    CameraOff,
}

impl fmt::Display for CameraError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use CameraError::{CameraOff, InitializationFailed, NotFrame, OpenCvError, OpenFailed};
        match self {
            InitializationFailed(msg) => write!(f, "Camera initialization failed: {msg}"),
            OpenFailed(id) => write!(f, "Failed to open camera with device index: {id}"),
            OpenCvError(e) => write!(f, "OpenCV error: {e}"),
            NotFrame => write!(f, "Camera returned an empty frame"),
            CameraOff => write!(f, "Camera not open"),
        }
    }
}

impl std::error::Error for CameraError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::OpenCvError(e) => Some(e),
            _ => None,
        }
    }
}

impl From<CvError> for CameraError {
    fn from(err: CvError) -> Self {
        Self::OpenCvError(err)
    }
}
