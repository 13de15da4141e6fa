use opencv::{core::Mat, prelude::*};

/// Borrowed view of the session's RGB output buffer.
///
/// The borrow ties the pixels to the session: another `detect`, `close` or
/// dropping the session needs `&mut Session`, so the view cannot outlive the
/// buffer it points into.
#[derive(Debug, Clone, Copy)]
pub struct FrameView<'a> {
    data: &'a [u8],
    width: i32,
    height: i32,
    channels: i32,
}

impl<'a> FrameView<'a> {
    /// # Errors
    /// Fails if `mat` is not continuous.
    pub fn from_mat(mat: &'a Mat) -> opencv::Result<Self> {
        Ok(Self {
            data: mat.data_bytes()?,
            width: mat.cols(),
            height: mat.rows(),
            channels: mat.channels(),
        })
    }

    #[must_use]
    pub const fn data(&self) -> &'a [u8] {
        self.data
    }

    #[must_use]
    pub const fn width(&self) -> i32 {
        self.width
    }

    #[must_use]
    pub const fn height(&self) -> i32 {
        self.height
    }

    #[must_use]
    pub const fn channels(&self) -> i32 {
        self.channels
    }

    /// `width * height * channels`, saturating at `i32::MAX`.
    #[must_use]
    pub const fn byte_len(&self) -> i32 {
        self.width
            .saturating_mul(self.height)
            .saturating_mul(self.channels)
    }
}
