//! The capture/detect session and the types its operations return.
pub mod capture_backend;
pub mod frame_view;
pub mod session;
pub mod session_config;
pub mod session_error;
pub mod session_state;
#[cfg(test)]
pub(crate) mod test_support;

pub use capture_backend::{CaptureBackend, OpenCvBackend};
pub use frame_view::FrameView;
pub use session::{Detection, Session};
pub use session_config::SessionConfig;
pub use session_error::{InitError, ScaleError, SessionError};
pub use session_state::SessionState;
