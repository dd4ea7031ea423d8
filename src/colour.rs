/// A DeviceRGB colour; r, g, and b range from 0.0 to 1.0
#[derive(Copy, Clone, PartialEq, Debug)]
pub struct Colour {
    pub r: f64,
    pub g: f64,
    pub b: f64,
}

impl Colour {
    /// Create a new colour. r, g, and b range from 0.0 to 1.0
    pub const fn new_rgb(r: f64, g: f64, b: f64) -> Colour {
        Colour { r, g, b }
    }
}

/// Pre-defined colour constants
pub mod colours {
    use super::*;

    pub const BLACK: Colour = Colour::new_rgb(0.0, 0.0, 0.0);
    pub const WHITE: Colour = Colour::new_rgb(1.0, 1.0, 1.0);
}

