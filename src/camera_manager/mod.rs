//! Frame capture from camera devices through `OpenCV`.
pub mod camera_error;
pub mod camera_manager;
pub mod frame_source;

pub use camera_error::CameraError;
pub use camera_manager::CameraManager;
pub use frame_source::FrameSource;
