//! Handle-based API: the host creates and destroys sessions explicitly and
//! passes the opaque pointer to every call. A null handle behaves like a
//! closed session.
#![allow(non_snake_case)]

use std::os::raw::c_int;

use super::{
    marshal::{detect_into, write_int},
    runtime::runtime,
};
use crate::{
    interop::{Circle, Frame, FrameError},
    session::Session,
};

/// Creates a closed session using the process config. Release it with
/// [`SessionDestroy`].
#[unsafe(no_mangle)]
pub extern "system" fn SessionCreate() -> *mut Session {
    Box::into_raw(Box::new(runtime().new_session()))
}

/// Closes and frees a session. Null is ignored.
///
/// # Safety
/// `session` must be null or a pointer from [`SessionCreate`] not yet
/// destroyed. Frame pointers obtained from it become invalid.
#[unsafe(no_mangle)]
pub unsafe extern "system" fn SessionDestroy(session: *mut Session) {
    if !session.is_null() {
        drop(unsafe { Box::from_raw(session) });
    }
}

/// Same contract as `Init`, on the given session. Null handle returns `-1`.
///
/// # Safety
/// `session` must be null or live; the out pointers null or writable.
#[unsafe(no_mangle)]
pub unsafe extern "system" fn SessionInit(
    session: *mut Session,
    out_width: *mut c_int,
    out_height: *mut c_int,
) -> c_int {
    let Some(session) = (unsafe { session.as_mut() }) else {
        return -1;
    };
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
}

/// # Safety
/// `session` must be null or live.
#[unsafe(no_mangle)]
pub unsafe extern "system" fn SessionClose(session: *mut Session) {
    if let Some(session) = unsafe { session.as_mut() } {
        session.close();
    }
}

/// Returns `0` when applied, `-1` for a non-positive scale or null handle.
///
/// # Safety
/// `session` must be null or live.
#[unsafe(no_mangle)]
pub unsafe extern "system" fn SessionSetScale(session: *mut Session, scale: c_int) -> c_int {
    let Some(session) = (unsafe { session.as_mut() }) else {
        return -1;
    };
    match session.set_scale(scale) {
        Ok(()) => 0,
        Err(_) => -1,
    }
}

/// # Safety
/// `session` must be null or live.
#[unsafe(no_mangle)]
pub unsafe extern "system" fn SessionFreeMemory(session: *mut Session) {
    if let Some(session) = unsafe { session.as_mut() } {
        session.free_memory();
    }
}

/// Same contract as `Detect`, on the given session: the count is
/// overwritten, never accumulated across calls.
///
/// # Safety
/// `session` must be null or live; see `Detect` for the other pointers.
#[unsafe(no_mangle)]
pub unsafe extern "system" fn SessionDetect(
    session: *mut Session,
    out_faces: *mut Circle,
    max_out_faces_count: c_int,
    out_detected_faces_count: *mut c_int,
) -> Frame {
    match unsafe { session.as_mut() } {
        None => Frame::sentinel(FrameError::NotOpen),
        Some(session) => unsafe {
            detect_into(
                session,
                out_faces,
                max_out_faces_count,
                out_detected_faces_count,
            )
        },
    }
}
