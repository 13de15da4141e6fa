use std::ptr;

use crate::{interop::frame_error::FrameError, session::frame_view::FrameView};

/// Frame handed to the host by value.
///
/// `mem_ptr` points into the session's output buffer. It stays valid until
/// the next `Detect`, `Close` or session destruction on that session; the
/// host must copy the pixels out before then.
#[repr(C)]
#[derive(Debug, Clone, Copy)]
pub struct Frame {
    pub mem_ptr: *const u8,
    pub x: i32,
    pub y: i32,
    pub buffer_size: i32,
    pub error: i32,
}

impl Frame {
    /// A fully formed failure frame: null pointer and `-1` dimensions.
    #[must_use]
    pub const fn sentinel(error: FrameError) -> Self {
        Self {
            mem_ptr: ptr::null(),
            x: -1,
            y: -1,
            buffer_size: -1,
            error: error.code(),
        }
    }

    /// Lowers a borrowed view to the raw boundary representation.
    #[must_use]
    pub fn from_view(view: &FrameView<'_>) -> Self {
        Self {
            mem_ptr: view.data().as_ptr(),
            x: view.width(),
            y: view.height(),
            buffer_size: view.byte_len(),
            error: FrameError::Ok.code(),
        }
    }

    #[must_use]
    pub const fn is_ok(&self) -> bool {
        self.error == FrameError::Ok as i32
    }
}
