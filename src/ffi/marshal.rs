use std::{os::raw::c_int, slice};

use crate::{
    interop::{Circle, Frame},
    session::Session,
};

/// Stores `value` through `out` if it is non-null.
///
/// # Safety
/// `out` must be null or valid for a write of one `c_int`.
pub(super) unsafe fn write_int(out: *mut c_int, value: c_int) {
    if let Some(slot) = unsafe { out.as_mut() } {
        *slot = value;
    }
}

/// Runs `detect` against a host-owned circle array and lowers the outcome
/// to a boundary [`Frame`].
///
/// `out_count` is left untouched when the call fails before detection, and
/// set to the number of circles written otherwise. A null `out_faces` or a
/// non-positive `max_out_faces` means no circles are written.
///
/// # Safety
/// `out_faces` must be null or valid for `max_out_faces` writes of `Circle`;
/// `out_count` must be null or valid for one write.
pub(super) unsafe fn detect_into(
    session: &mut Session,
    out_faces: *mut Circle,
    max_out_faces: c_int,
    out_count: *mut c_int,
) -> Frame {
    let len = usize::try_from(max_out_faces).unwrap_or(0);
    let faces: &mut [Circle] = if out_faces.is_null() || len == 0 {
        Default::default()
    } else {
        unsafe { slice::from_raw_parts_mut(out_faces, len) }
    };

    let (frame, written) = match session.detect(faces) {
        Ok(det) => (Frame::from_view(&det.frame), Some(det.faces_written)),
        Err(e) => (Frame::sentinel(e.frame_error()), e.faces_written()),
    };

    if let Some(n) = written {
        unsafe { write_int(out_count, c_int::try_from(n).unwrap_or(c_int::MAX)) };
    }
    frame
}
