use opencv::core::{Mat, Rect, Vector};

use super::detection_params::DetectionParams;

/// Finds face rectangles on a preprocessed 8-bit grayscale image.
pub trait FaceDetector: Send {
    /// Replaces the contents of `faces` with the rectangles found on `gray`,
    /// in `gray`'s coordinates.
    ///
    /// # Errors
    /// Propagates `OpenCV` failures.
    fn detect(
        &mut self,
        gray: &Mat,
        params: &DetectionParams,
        faces: &mut Vector<Rect>,
    ) -> opencv::Result<()>;
}
