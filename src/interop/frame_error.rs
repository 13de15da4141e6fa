/// Error codes carried in [`Frame::error`](super::Frame::error).
#[repr(i32)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameError {
    Ok = 0,
    /// No capture device is open (never initialized, closed, or lost).
    NotOpen = -1,
    /// The device returned an empty frame; the session has been closed.
    EmptyCapture = -2,
    /// The color-converted output frame is empty or could not be produced.
    EmptyOutput = -3,
    /// Never produced here; the host uses it for its own bookkeeping.
    HostReserved = -4,
}

impl FrameError {
    #[must_use]
    pub const fn code(self) -> i32 {
        self as i32
    }
}
