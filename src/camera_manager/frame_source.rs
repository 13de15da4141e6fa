use opencv::core::Mat;

use super::camera_error::CameraError;

/// Something that yields BGR frames one at a time.
///
/// The session owns exactly one source while open and drops it on close.
pub trait FrameSource: Send {
    /// Native frame size as `(width, height)`.
    fn frame_size(&self) -> (i32, i32);

    /// Reads the next frame into `frame`, reusing its allocation.
    ///
    /// # Errors
    /// `CameraError::NotFrame` when the device produced nothing (unplugged
    /// webcam), `CameraError::CameraOff` after [`release`](Self::release).
    fn read_into(&mut self, frame: &mut Mat) -> Result<(), CameraError>;

    /// Releases the device. Safe to call more than once.
    fn release(&mut self);
}
