use opencv::{
    core::{AlgorithmHint, Mat, Size},
    imgproc,
    prelude::*,
};

/// Converts captured BGR frames into the equalized grayscale image the
/// cascade scans. Intermediate buffers are kept between calls so steady
/// state capture does not allocate.
pub struct Preprocessor {
    gray: Mat,
    resized: Mat,
    equalized: Mat,
}

impl Default for Preprocessor {
    fn default() -> Self {
        Self::new()
    }
}

impl Preprocessor {
    #[must_use]
    pub fn new() -> Self {
        Self {
            gray: Mat::default(),
            resized: Mat::default(),
            equalized: Mat::default(),
        }
    }

    /// Grayscale, downscale by `scale` (integer division of both sides),
    /// then histogram-equalize. `scale == 1` skips the resize entirely.
    ///
    /// `scale` must be positive; the session rejects anything else before it
    /// gets here.
    ///
    /// # Errors
    /// Propagates `OpenCV` failures, e.g. a frame that is not 3-channel.
    pub fn run(&mut self, frame: &Mat, scale: i32) -> opencv::Result<&Mat> {
        imgproc::cvt_color(
            frame,
            &mut self.gray,
            imgproc::COLOR_BGR2GRAY,
            0,
            AlgorithmHint::ALGO_HINT_DEFAULT,
        )?;

        if scale > 1 {
            let size = downscaled_size(frame.cols(), frame.rows(), scale);
            imgproc::resize(
                &self.gray,
                &mut self.resized,
                size,
                0.0,
                0.0,
                imgproc::INTER_LINEAR,
            )?;
            imgproc::equalize_hist(&self.resized, &mut self.equalized)?;
        } else {
            imgproc::equalize_hist(&self.gray, &mut self.equalized)?;
        }

        Ok(&self.equalized)
    }
}

/// Target size for a `cols x rows` frame divided by `scale`, never below 1x1.
#[must_use]
pub fn downscaled_size(cols: i32, rows: i32, scale: i32) -> Size {
    let scale = scale.max(1);
    Size::new((cols / scale).max(1), (rows / scale).max(1))
}
