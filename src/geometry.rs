/// A point in the drawing's coordinate space. The unit is up to the caller;
/// everything in this crate draws in inches.
#[derive(Debug, Default, Copy, Clone, PartialEq)]
pub struct Coord {
    pub x: f64,
    pub y: f64,
}

impl Coord {
    pub const fn new(x: f64, y: f64) -> Coord {
        Coord { x, y }
    }
}

/// Signed extents. With the conventions used by
/// [`ContentStream::rect`](crate::ContentStream::rect), a positive width grows
/// to the right and a positive height grows downward from the starting corner.
#[derive(Debug, Default, Copy, Clone, PartialEq)]
pub struct Dimensions {
    pub width: f64,
    pub height: f64,
}

impl Dimensions {
    pub const fn new(width: f64, height: f64) -> Dimensions {
        Dimensions { width, height }
    }
}
