#![allow(clippy::unwrap_used, clippy::expect_used)]

use facecap_interop::{
    ffi::{
        handle::{
            SessionClose, SessionCreate, SessionDestroy, SessionDetect, SessionFreeMemory,
            SessionInit, SessionSetScale,
        },
        legacy::{Close, Detect, FreeMemory},
    },
    interop::{Circle, FrameError},
};
use std::{os::raw::c_int, ptr};

#[test]
fn legacy_detect_before_init_reports_not_open() {
    let mut faces = [Circle::default(); 4];
    let mut count: c_int = 7;

    let frame = unsafe { Detect(faces.as_mut_ptr(), 4, &mut count) };

    assert_eq!(frame.error, FrameError::NotOpen.code());
    assert!(frame.mem_ptr.is_null());
    assert_eq!((frame.x, frame.y, frame.buffer_size), (-1, -1, -1));
    assert_eq!(count, 7, "count is untouched when nothing was captured");

    // Both are no-ops without a session.
    Close();
    FreeMemory();
}

#[test]
fn handle_session_starts_closed() {
    let session = SessionCreate();
    assert!(!session.is_null());

    let mut faces = [Circle::default(); 2];
    let mut count: c_int = 0;
    let frame = unsafe { SessionDetect(session, faces.as_mut_ptr(), 2, &mut count) };
    assert_eq!(frame.error, -1);
    assert_eq!(count, 0);

    unsafe {
        SessionFreeMemory(session);
        SessionClose(session);
        SessionClose(session);
        SessionDestroy(session);
    }
}

#[test]
fn handle_set_scale_rejects_non_positive() {
    let session = SessionCreate();
    unsafe {
        assert_eq!(SessionSetScale(session, 2), 0);
        assert_eq!(SessionSetScale(session, 0), -1);
        assert_eq!(SessionSetScale(session, -3), -1);
        assert_eq!((*session).scale(), 2);
        SessionDestroy(session);
    }
}

#[test]
fn missing_classifier_fails_init_without_opening_device() {
    let session = SessionCreate();
    let cascade = unsafe { (*session).config().cascade_path.clone() };
    if cascade.exists() {
        // A real classifier next to the test binary would reach for a camera.
        unsafe { SessionDestroy(session) };
        return;
    }

    let (mut w, mut h): (c_int, c_int) = (0, 0);
    unsafe {
        assert_eq!(SessionInit(session, &mut w, &mut h), -1);
        assert_eq!((w, h), (0, 0));
        assert!(!(*session).is_open());

        let frame = SessionDetect(session, ptr::null_mut(), 0, ptr::null_mut());
        assert_eq!(frame.error, FrameError::NotOpen.code());
        SessionDestroy(session);
    }
}

#[test]
fn null_handles_are_tolerated() {
    let null = ptr::null_mut();
    let mut count: c_int = 3;
    unsafe {
        assert_eq!(SessionInit(null, ptr::null_mut(), ptr::null_mut()), -1);
        assert_eq!(SessionSetScale(null, 2), -1);
        let frame = SessionDetect(null, ptr::null_mut(), 5, &mut count);
        assert_eq!(frame.error, -1);
        SessionClose(null);
        SessionFreeMemory(null);
        SessionDestroy(null);
    }
    assert_eq!(count, 3);
}
