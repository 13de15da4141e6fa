//! Plain-old-data types shared with the managed host. Layouts are fixed:
//! the host declares matching sequential structs (`Circle` = 12 bytes,
//! `Frame` = 24 bytes on 64-bit targets).
pub mod circle;
pub mod frame;
pub mod frame_error;

pub use circle::Circle;
pub use frame::Frame;
pub use frame_error::FrameError;
