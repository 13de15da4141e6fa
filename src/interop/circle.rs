use opencv::core::Rect;

/// One detected face: center and radius in capture-resolution pixels.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Circle {
    pub x: i32,
    pub y: i32,
    pub radius: i32,
}

impl Circle {
    #[must_use]
    pub const fn new(x: i32, y: i32, radius: i32) -> Self {
        Self { x, y, radius }
    }

    /// Maps a rectangle found on the image downscaled by `scale` back to the
    /// capture resolution. The radius is half the rectangle width.
    #[must_use]
    pub fn from_detection(rect: Rect, scale: i32) -> Self {
        Self {
            x: scale * (rect.x + rect.width / 2),
            y: scale * (rect.y + rect.height / 2),
            radius: scale * (rect.width / 2),
        }
    }
}
