//! Flat API over one process-wide session.
//!
//! The host calls these from its main thread only. The mutex keeps the Rust
//! side sound if it does not, at the cost of serializing the calls.
#![allow(non_snake_case)]

use std::{
    os::raw::c_int,
    sync::{Mutex, PoisonError},
};

use super::{
    marshal::{detect_into, write_int},
    runtime::runtime,
};
use crate::{
    interop::{Circle, Frame, FrameError},
    session::Session,
};

static DEFAULT_SESSION: Mutex<Option<Session>> = Mutex::new(None);

fn with_default<R>(f: impl FnOnce(&mut Option<Session>) -> R) -> R {
    let mut guard = DEFAULT_SESSION
        .lock()
        .unwrap_or_else(PoisonError::into_inner);
    f(&mut guard)
}

/// Loads the classifier and opens the capture device.
///
/// Returns `0` and writes the native frame size on success, `-1` if the
/// classifier cannot be loaded, `-2` if the device cannot be opened.
///
/// # Safety
/// `out_width` and `out_height` must each be null or valid for one write.
#[unsafe(no_mangle)]
pub unsafe extern "system" fn Init(out_width: *mut c_int, out_height: *mut c_int) -> c_int {
    with_default(|slot| {
        let session = slot.get_or_insert_with(|| runtime().new_session());
        match session.init() {
            Ok((w, h)) => {
                unsafe {
                    write_int(out_width, w);
                    write_int(out_height, h);
                }
                0
            }
            Err(e) => e.code(),
        }
    })
}

/// Releases the capture device. Safe to call repeatedly or before `Init`.
#[unsafe(no_mangle)]
pub extern "system" fn Close() {
    with_default(|slot| {
        if let Some(session) = slot.as_mut() {
            session.close();
        }
    });
}

/// Sets the detection downscale divisor. Non-positive values are ignored.
#[unsafe(no_mangle)]
pub extern "system" fn SetScale(scale: c_int) {
    with_default(|slot| {
        let session = slot.get_or_insert_with(|| runtime().new_session());
        let _ = session.set_scale(scale);
    });
}

/// Signals that the host no longer references the last returned frame.
#[unsafe(no_mangle)]
pub extern "system" fn FreeMemory() {
    with_default(|slot| {
        if let Some(session) = slot.as_mut() {
            session.free_memory();
        }
    });
}

/// Captures a frame, detects faces and returns the annotated RGB frame.
///
/// `*out_detected_faces_count` is overwritten with the number of circles
/// written, not added to; whatever the host stored there beforehand is lost.
/// It is left as is only when the frame error is `-1` or `-2`.
///
/// # Safety
/// `out_faces` must be null or valid for `max_out_faces_count` writes of
/// `Circle`; `out_detected_faces_count` must be null or valid for one write.
/// The returned `mem_ptr` is valid until the next `Detect` or `Close`.
#[unsafe(no_mangle)]
pub unsafe extern "system" fn Detect(
    out_faces: *mut Circle,
    max_out_faces_count: c_int,
    out_detected_faces_count: *mut c_int,
) -> Frame {
    with_default(|slot| match slot.as_mut() {
        None => Frame::sentinel(FrameError::NotOpen),
        Some(session) => unsafe {
            detect_into(
                session,
                out_faces,
                max_out_faces_count,
                out_detected_faces_count,
            )
        },
    })
}
