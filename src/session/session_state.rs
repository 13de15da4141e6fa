use crate::camera_manager::FrameSource;

/// Capture state of a [`Session`](super::Session).
///
/// ```text
///            init ok
///   Closed ───────────▶ Open
///     ▲                  │
///     │  close / empty   │
///     └──── capture ─────┘
/// ```
///
/// The open device lives inside the `Open` variant, so a closed session
/// cannot hold a stale handle.
#[derive(Default)]
pub enum SessionState {
    #[default]
    Closed,
    Open(Box<dyn FrameSource>),
}

impl SessionState {
    #[must_use]
    pub const fn is_open(&self) -> bool {
        matches!(self, Self::Open(_))
    }

    /// Moves to `Closed`, releasing the device if one was open.
    /// Returns whether a device was released.
    pub fn close(&mut self) -> bool {
        match std::mem::replace(self, Self::Closed) {
            Self::Open(mut source) => {
                source.release();
                true
            }
            Self::Closed => false,
        }
    }
}
